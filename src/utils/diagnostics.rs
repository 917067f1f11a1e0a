// file: src/utils/diagnostics.rs
// description: environment dump used to debug connection settings
// reference: LLAMA_* variable inspection for misconfigured deployments

use std::fmt;

pub const PORT_VAR: &str = "LLAMA_STACK_PORT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortDiagnosis {
    pub raw: String,
    pub length: usize,
    pub bytes: Vec<u8>,
    pub parsed: std::result::Result<i64, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvReport {
    pub llama_vars: Vec<(String, String)>,
    pub port: Option<PortDiagnosis>,
}

impl EnvReport {
    pub fn collect<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut llama_vars: Vec<(String, String)> =
            vars.into_iter().filter(|(k, _)| k.contains("LLAMA")).collect();
        llama_vars.sort();

        let port = llama_vars
            .iter()
            .find(|(k, _)| k == PORT_VAR)
            .map(|(_, v)| PortDiagnosis {
                raw: v.clone(),
                length: v.len(),
                bytes: v.as_bytes().to_vec(),
                parsed: v.parse::<i64>().map_err(|e| e.to_string()),
            });

        Self { llama_vars, port }
    }

    pub fn from_process_env() -> Self {
        Self::collect(std::env::vars())
    }
}

impl fmt::Display for EnvReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Environment variables with 'LLAMA':")?;
        if self.llama_vars.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (key, value) in &self.llama_vars {
            writeln!(f, "  {} = {:?}", key, value)?;
        }

        writeln!(f)?;
        writeln!(f, "{} check:", PORT_VAR)?;
        match &self.port {
            None => writeln!(f, "  not set")?,
            Some(port) => {
                writeln!(f, "  Raw value: {:?}", port.raw)?;
                writeln!(f, "  Length: {}", port.length)?;
                writeln!(f, "  Bytes: {:?}", port.bytes)?;
                match &port.parsed {
                    Ok(n) => writeln!(f, "  As int: {}", n)?,
                    Err(e) => writeln!(f, "  ERROR converting to int: {}", e)?,
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_collect_filters_and_sorts() {
        let report = EnvReport::collect(vars(&[
            ("PATH", "/usr/bin"),
            ("LLAMA_STACK_PORT", "8321"),
            ("LLAMA_STACK_HOST", "localhost"),
        ]));

        assert_eq!(
            report.llama_vars,
            vars(&[("LLAMA_STACK_HOST", "localhost"), ("LLAMA_STACK_PORT", "8321")])
        );
        assert_eq!(report.port.unwrap().parsed, Ok(8321));
    }

    #[test]
    fn test_port_with_stray_characters() {
        let report = EnvReport::collect(vars(&[("LLAMA_STACK_PORT", "8321\n")]));
        let port = report.port.unwrap();

        assert_eq!(port.length, 5);
        assert_eq!(port.bytes.last(), Some(&b'\n'));
        assert!(port.parsed.is_err());
    }

    #[test]
    fn test_display_without_port() {
        let report = EnvReport::collect(Vec::new());
        let text = report.to_string();

        assert!(text.contains("(none)"));
        assert!(text.contains("not set"));
    }
}
