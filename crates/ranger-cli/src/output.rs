//! Output formatting utilities

use std::fmt::Display;

use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Format a report: its `Display` impl for tables, pretty JSON otherwise
pub fn format_output<T: Serialize + Display>(data: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Table => data.to_string(),
    }
}

pub fn print_output<T: Serialize + Display>(data: &T, format: OutputFormat) {
    println!("{}", format_output(data, format));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        park: String,
        visits: usize,
    }

    impl Display for Row {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}: {}", self.park, self.visits)
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from("csv"), OutputFormat::Table);
    }

    #[test]
    fn test_format_output() {
        let row = Row {
            park: "Zion".to_string(),
            visits: 3,
        };
        assert_eq!(format_output(&row, OutputFormat::Table), "Zion: 3");

        let json: serde_json::Value =
            serde_json::from_str(&format_output(&row, OutputFormat::Json)).unwrap();
        assert_eq!(json["visits"], 3);
    }
}
