//! Checklist matching over terminator-delimited DDL.
//!
//! A checklist is a set of alternative expectations: each row is an ordered
//! list of substrings that must all appear within one single statement of
//! the split DDL. A statement becomes the row's candidate the moment it
//! contains the row's first item; from then on every remaining item must be
//! in that same statement or the whole check fails. The first qualifying
//! statement wins.

use crate::error::{GenError, Result};

pub(crate) fn check(ddl: &str, checklist: &[&[&str]], term: char) -> Result<()> {
    if !ddl.contains(term) {
        return Err(GenError::Format { terminator: term, ddl: ddl.to_string() });
    }

    // The split eats the terminator; add it back in case expected text
    // needs it.
    let statements: Vec<String> = ddl.split(term).map(|s| format!("{s}{term}")).collect();

    for row in checklist {
        let mut satisfied = false;

        'statements: for stmt in &statements {
            let mut anchored = false;
            for (idx, item) in row.iter().enumerate() {
                if stmt.contains(item) {
                    anchored = true;
                } else if anchored {
                    // The statement owned this row's anchor but is missing
                    // a later item: fail-fast rather than keep scanning,
                    // which would hide partial matches.
                    return Err(GenError::ChecklistMismatch {
                        row: row.join("\n"),
                        position: idx + 1,
                        item: item.to_string(),
                        statement: stmt.clone(),
                        ddl: ddl.to_string(),
                    });
                } else {
                    // No anchor here; this statement is not the candidate.
                    continue 'statements;
                }
            }
            if anchored {
                satisfied = true;
                break;
            }
        }

        // An empty row can never anchor and lands here too.
        if !satisfied {
            return Err(GenError::ChecklistUnmatched { row: row.join("\n") });
        }
    }

    Ok(())
}
