use thiserror::Error;

/// Failures raised by the harness. Everything is fail-fast: the first
/// violated precondition or unmatched expectation surfaces immediately,
/// carrying the full offending text since the generation itself is opaque.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("call execute() before retrieving the DDL or report")]
    NotExecuted,

    #[error("could not find terminator '{terminator}' in DDL:\n{ddl}")]
    Format { terminator: char, ddl: String },

    #[error(
        "failed on checklist row:\n{row}\ncould not find item #{position}, \
         string value '{item}' in this statement:\n{statement}\nfull DDL:\n{ddl}"
    )]
    ChecklistMismatch {
        row: String,
        position: usize,
        item: String,
        statement: String,
        ddl: String,
    },

    #[error("could not find any items in DDL from checklist row:\n{row}")]
    ChecklistUnmatched { row: String },

    #[error("failed to find line '{line}' in report. Full report:\n\n{report}")]
    ReportMissingText { line: String, report: String },

    #[error("unexpectedly found line '{line}' in report. Full report:\n\n{report}")]
    ReportUnexpectedText { line: String, report: String },

    #[error("report validation failed: {detail}\nFull report:\n\n{report}")]
    ReportValidation { detail: String, report: String },

    #[error("procedure call failed: {0}")]
    Procedure(String),

    #[error("z/OSMF request failed: {0}")]
    Zosmf(String),
}

pub type Result<T> = std::result::Result<T, GenError>;
