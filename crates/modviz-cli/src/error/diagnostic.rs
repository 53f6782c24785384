//! Conversion of CLI errors into miette reports.

use miette::Report;

use crate::error::CliError;

pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Graph(modviz_graph::Error::MalformedModule { index, reason }) => miette::miette!(
            "Snapshot module #{index} is malformed: {reason}\n\nHint: Every module needs a non-empty \"id\""
        ),
        CliError::Graph(modviz_graph::Error::Json(e)) => miette::miette!(
            "Snapshot is not valid JSON: {e}\n\nHint: Expected {{ \"root\": string, \"modules\": [{{ \"id\", \"deps\", \"virtual\" }}] }}"
        ),
        CliError::Config(e) => miette::miette!("Configuration error: {e}"),
        other => miette::miette!("{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_module_report() {
        let report = cli_error_to_miette(CliError::Graph(modviz_graph::Error::MalformedModule {
            index: 3,
            reason: "module id is empty".to_string(),
        }));
        let msg = report.to_string();
        assert!(msg.contains("#3"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let report = cli_error_to_miette(CliError::InvalidArgument("bad".into()));
        assert_eq!(report.to_string(), "Invalid argument: bad");
    }
}
