//! The GEN harness itself: accumulate options and object requests, run the
//! stored procedure once, keep its DDL and report, and verify them.

mod checklist;

use tracing::debug;

use crate::client::zosmf::ReportSource;
use crate::client::{GenCaller, ProcedureArgs};
use crate::config::GenDefaults;
use crate::error::{GenError, Result};
use crate::options::GenOptions;
use crate::output::{RptOutput, SqlOutput};
use crate::request::RequestList;

/// Banner ADB2GEN writes at the top of every successful report.
pub const REPORT_BANNER: &str = "ADB2GEN - Create DDL from catalog info";

/// A -805 in the report means the procedure's packages are not bound on the
/// target subsystem; it shows up in both spaced and unspaced forms.
const BIND_FAILURE_MARKERS: [&str; 2] = ["SQLCODE=-805", "SQLCODE = -805"];

/// One reverse-engineering run. Accumulate requests and option tweaks, call
/// [`Gen::execute`] once, then read or assert over the results. Results are
/// inaccessible until a run has completed successfully.
pub struct Gen {
    pub options: GenOptions,
    seeded: GenOptions,
    pub requests: RequestList,
    pub sql_output: SqlOutput,
    pub rpt_output: RptOutput,
    /// Run the stored procedure itself in debug mode.
    pub debug_proc: bool,
    lpar: String,
    ddl_lines: Vec<String>,
    ddl_text: String,
    report: String,
    executed: bool,
}

impl Gen {
    pub fn new(defaults: &GenDefaults) -> Self {
        let options = GenOptions::seeded(defaults);
        Self {
            seeded: options.clone(),
            options,
            requests: RequestList::new(),
            sql_output: SqlOutput::default(),
            rpt_output: RptOutput::new(&defaults.tso_user),
            debug_proc: false,
            lpar: defaults.lpar.clone(),
            ddl_lines: Vec::new(),
            ddl_text: String::new(),
            report: String::new(),
            executed: false,
        }
    }

    /// Aim the run at another subsystem on the same LPAR.
    pub fn retarget(&mut self, ssid: &str) {
        self.options.retarget(&self.lpar, ssid);
    }

    /// The sparse option list, `DB2SYS`/`DB2REL` first, deltas only.
    pub fn render_parameters(&self) -> String {
        self.options.render_parameters(&self.seeded)
    }

    /// The two output destination descriptors (SQL, report).
    pub fn render_outputs(&self) -> (String, String) {
        (self.sql_output.render(), self.rpt_output.render())
    }

    /// All six positional procedure arguments in call order.
    pub fn procedure_args(&self) -> ProcedureArgs {
        let (sql_output_list, rpt_output_list) = self.render_outputs();
        ProcedureArgs {
            parameter_list: self.render_parameters(),
            request_list: self.requests.render(),
            sql_output_list,
            rpt_output_list,
            debug_mode: if self.debug_proc { "DEBUG".into() } else { String::new() },
            return_code: String::new(),
        }
    }

    /// Serialize everything, make the one procedure call, and capture the
    /// DDL result set. When a report destination is configured the report
    /// is fetched through `reports` and screened for the success banner and
    /// for bind failures before the run counts as executed.
    pub async fn execute<C, R>(&mut self, caller: &C, reports: Option<&R>) -> Result<()>
    where
        C: GenCaller + ?Sized,
        R: ReportSource + ?Sized,
    {
        if self.requests.is_empty() {
            return Err(GenError::Configuration(
                "request list is empty; use add_table and friends to build it before execute".into(),
            ));
        }

        let args = self.procedure_args();
        debug!(
            parameters = %args.parameter_list,
            requests = %args.request_list,
            sql_output = %args.sql_output_list,
            rpt_output = %args.rpt_output_list,
            debug_proc = self.debug_proc,
            "invoking ADB2RE"
        );

        let rows = caller.call(&args).await?;

        // Only the second column of each row carries DDL text.
        let mut lines = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            let mut columns = row.into_iter();
            let _seq = columns.next();
            match columns.next() {
                Some(text) => lines.push(text),
                None => {
                    return Err(GenError::Procedure(format!(
                        "result row {} has no DDL column",
                        i + 1
                    )))
                }
            }
        }

        if !self.rpt_output.dsname.is_empty() {
            let source = reports.ok_or_else(|| {
                GenError::Configuration(
                    "a report destination is configured but no report source was provided".into(),
                )
            })?;
            self.report = source.read_dataset(&self.rpt_output.dsname).await?;
            debug!(bytes = self.report.len(), "report stored in memory");
            self.validate_report()?;
        }

        self.ddl_lines = lines;
        self.ddl_text = self.ddl_lines.iter().map(|l| format!("{l}\n")).collect();
        debug!(lines = self.ddl_lines.len(), "DDL stored in memory");
        self.executed = true;
        Ok(())
    }

    // Regression guard over the fresh report: the generation banner must be
    // there and no bind failure may have been logged.
    fn validate_report(&self) -> Result<()> {
        if !self.report.contains(REPORT_BANNER) {
            return Err(GenError::ReportValidation {
                detail: format!("missing banner '{REPORT_BANNER}'"),
                report: self.report.clone(),
            });
        }
        for marker in BIND_FAILURE_MARKERS {
            if self.report.contains(marker) {
                return Err(GenError::ReportValidation {
                    detail: format!("found '{marker}'"),
                    report: self.report.clone(),
                });
            }
        }
        Ok(())
    }

    fn ensure_executed(&self) -> Result<()> {
        if self.executed {
            Ok(())
        } else {
            Err(GenError::NotExecuted)
        }
    }

    /// The generated DDL, one line per element, in arrival order.
    pub fn ddl_as_array(&self) -> Result<&[String]> {
        self.ensure_executed()?;
        Ok(&self.ddl_lines)
    }

    /// The generated DDL as one string, each line newline-terminated.
    pub fn ddl_as_string(&self) -> Result<&str> {
        self.ensure_executed()?;
        Ok(&self.ddl_text)
    }

    /// The generation report text.
    pub fn report_as_string(&self) -> Result<&str> {
        self.ensure_executed()?;
        Ok(&self.report)
    }

    /// Verify that every checklist row is satisfied by at least one
    /// statement of the DDL split on `term`. Each row is an ordered list of
    /// substrings; the statement containing a row's first item must contain
    /// all of its remaining items too.
    pub fn assert_text_between_terminators(&self, list: &[&[&str]], term: char) -> Result<()> {
        let ddl = self.ddl_as_string()?;
        checklist::check(ddl, list, term)
    }

    /// Require every line to occur somewhere in the stored report.
    pub fn assert_text_in_report(&self, lines: &[&str]) -> Result<()> {
        self.check_report(lines, true)
    }

    /// Forbid every line from occurring in the stored report.
    pub fn assert_text_not_in_report(&self, lines: &[&str]) -> Result<()> {
        self.check_report(lines, false)
    }

    fn check_report(&self, lines: &[&str], expect_present: bool) -> Result<()> {
        if self.rpt_output.dsname.is_empty() {
            return Err(GenError::Configuration(
                "RPT_DSNAME must be set before calling execute()".into(),
            ));
        }
        for line in lines {
            let found = self.report.contains(line);
            if expect_present && !found {
                return Err(GenError::ReportMissingText {
                    line: line.to_string(),
                    report: self.report.clone(),
                });
            }
            if !expect_present && found {
                return Err(GenError::ReportUnexpectedText {
                    line: line.to_string(),
                    report: self.report.clone(),
                });
            }
        }
        Ok(())
    }
}
