//! External Converter
//!
//! Runs a conversion tool as a subprocess:
//! `<program> [args...] <source> -o -f json <destination>`.
//! owltools is the default; anything honouring the same arguments works.

use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::config::ConverterConfig;
use crate::domain::ports::Converter;
use crate::error::{OntologyError, OntologyResult};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Bytes of converter stderr kept for diagnostics on failure
const STDERR_TAIL: usize = 2048;

/// Converter backed by an external command
#[derive(Debug, Clone)]
pub struct ExternalConverter {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl ExternalConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    /// Arguments placed between the program and the source locator
    /// (e.g. `java -jar owltools.jar`)
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Kill the tool if it runs longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(config.program.clone())
            .with_args(config.args.clone())
            .with_timeout(config.timeout())
    }

    /// Check if the program can be started at all
    pub fn check_available(&self) -> bool {
        Command::new(&self.program)
            .args(&self.args)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    /// Full argument vector for one conversion
    pub fn command_line(&self, source: &str, destination: &Path) -> Vec<String> {
        let mut line = Vec::with_capacity(self.args.len() + 6);
        line.push(self.program.clone());
        line.extend(self.args.iter().cloned());
        line.push(source.to_string());
        line.extend(["-o", "-f", "json"].map(String::from));
        line.push(destination.display().to_string());
        line
    }

    fn wait(&self, child: &mut Child, command: &str) -> OntologyResult<ExitStatus> {
        let Some(timeout) = self.timeout else {
            return Ok(child.wait()?);
        };

        let deadline = Instant::now() + timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            let now = Instant::now();
            if now >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(OntologyError::ConverterTimeout {
                    command: command.to_string(),
                    timeout,
                });
            }
            std::thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }
}

impl Default for ExternalConverter {
    fn default() -> Self {
        Self::from_config(&ConverterConfig::default())
    }
}

impl Converter for ExternalConverter {
    fn name(&self) -> &str {
        &self.program
    }

    fn convert(&self, source: &str, destination: &Path) -> OntologyResult<()> {
        let line = self.command_line(source, destination);
        let command = line.join(" ");

        // stderr goes to an anonymous file rather than a pipe so a chatty
        // tool cannot block on a full buffer while we wait on it
        let mut stderr_log = tempfile::tempfile()?;

        tracing::info!(%command, "running converter");
        let started = Instant::now();

        let mut child = Command::new(&line[0])
            .args(&line[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::from(stderr_log.try_clone()?))
            .spawn()
            .map_err(|source| OntologyError::ConverterUnavailable {
                command: command.clone(),
                source,
            })?;

        let status = self.wait(&mut child, &command)?;

        if !status.success() {
            let tail = read_tail(&mut stderr_log);
            tracing::warn!(
                %command,
                exit_code = ?status.code(),
                stderr = %tail,
                "converter failed"
            );
            return Err(OntologyError::ExternalTool {
                exit_code: status.code(),
                command,
            });
        }

        tracing::info!(
            destination = %destination.display(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "converter finished"
        );
        Ok(())
    }
}

fn read_tail(file: &mut std::fs::File) -> String {
    let mut buf = Vec::new();
    if file.seek(SeekFrom::Start(0)).is_err() || file.read_to_end(&mut buf).is_err() {
        return String::new();
    }
    let start = buf.len().saturating_sub(STDERR_TAIL);
    String::from_utf8_lossy(&buf[start..]).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_follows_owltools_template() {
        let converter = ExternalConverter::new("owltools");
        let line = converter.command_line(
            "http://purl.obolibrary.org/obo/pato.owl",
            Path::new("/tmp/obo:pato.owl"),
        );
        assert_eq!(
            line,
            vec![
                "owltools",
                "http://purl.obolibrary.org/obo/pato.owl",
                "-o",
                "-f",
                "json",
                "/tmp/obo:pato.owl"
            ]
        );
    }

    #[test]
    fn command_line_places_leading_args_before_source() {
        let converter = ExternalConverter::new("java")
            .with_args(vec!["-jar".to_string(), "owltools.jar".to_string()]);
        let line = converter.command_line("pato.obo", Path::new("out"));
        assert_eq!(
            line,
            vec!["java", "-jar", "owltools.jar", "pato.obo", "-o", "-f", "json", "out"]
        );
    }

    #[test]
    fn converter_name_is_program() {
        assert_eq!(ExternalConverter::new("owltools").name(), "owltools");
    }

    #[test]
    fn missing_program_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let converter = ExternalConverter::new("ontofactory-no-such-converter");
        let err = converter
            .convert("pato.obo", &dir.path().join("out.json"))
            .unwrap_err();
        assert!(matches!(err, OntologyError::ConverterUnavailable { .. }));
        assert!(!converter.check_available());
    }

    #[test]
    fn read_tail_keeps_last_bytes() {
        use std::io::Write;
        let mut file = tempfile::tempfile().unwrap();
        let long = "x".repeat(STDERR_TAIL + 10) + "END";
        file.write_all(long.as_bytes()).unwrap();
        let tail = read_tail(&mut file);
        assert_eq!(tail.len(), STDERR_TAIL);
        assert!(tail.ends_with("END"));
    }
}
