//! PDF compilation — one-shot `pdflatex` invocation in a throwaway
//! workspace.

use tokio::process::Command;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;

/// Lines of engine output kept in the error message on failure.
const LOG_TAIL_LINES: usize = 20;

/// Compiles LaTeX source to PDF bytes.
///
/// The source is written under a temp dir with a unique name, `pdflatex`
/// runs with `-interaction=nonstopmode`, and the workspace (aux/log files
/// included) is dropped with the temp dir.
pub async fn compile_pdf(tex_source: &str) -> Result<Vec<u8>, AppError> {
    let workdir = tempfile::tempdir()
        .map_err(|e| AppError::Render(format!("failed to create render workspace: {e}")))?;

    let job_id = Uuid::new_v4().simple().to_string();
    let tex_path = workdir.path().join(format!("{job_id}.tex"));
    tokio::fs::write(&tex_path, tex_source)
        .await
        .map_err(|e| AppError::Render(format!("failed to write LaTeX source: {e}")))?;

    debug!("Compiling resume {job_id}");
    let output = Command::new("pdflatex")
        .arg("-interaction=nonstopmode")
        .arg("-output-directory")
        .arg(workdir.path())
        .arg(&tex_path)
        .output()
        .await
        .map_err(|e| AppError::Render(format!("failed to run pdflatex: {e}")))?;

    if !output.status.success() {
        return Err(AppError::Render(format!(
            "pdflatex exited with {}: {}",
            output.status,
            log_tail(&output.stdout)
        )));
    }

    let pdf_path = workdir.path().join(format!("{job_id}.pdf"));
    tokio::fs::read(&pdf_path)
        .await
        .map_err(|e| AppError::Render(format!("failed to read generated PDF: {e}")))
}

fn log_tail(stdout: &[u8]) -> String {
    let log = String::from_utf8_lossy(stdout);
    let lines: Vec<&str> = log.lines().collect();
    let start = lines.len().saturating_sub(LOG_TAIL_LINES);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_tail_short_log() {
        assert_eq!(log_tail(b"one\ntwo"), "one\ntwo");
    }

    #[test]
    fn test_log_tail_truncates_long_log() {
        let log = (0..100).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let tail = log_tail(log.as_bytes());
        assert_eq!(tail.lines().count(), LOG_TAIL_LINES);
        assert!(tail.starts_with("line 80"));
        assert!(tail.ends_with("line 99"));
    }
}
