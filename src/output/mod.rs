//! Output destination descriptors: where the procedure puts the generated
//! SQL and the diagnostic report. Same sparse `KEY='VALUE'` encoding as the
//! parameter list; empty optional fields are omitted.

/// Destination of the generated DDL. The default `RS` outflag returns the
/// statements as the procedure's result set, which is what the harness
/// consumes; a data set name switches it to batch output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlOutput {
    pub outflag: String,
    pub dsname: String,
    pub member: String,
    pub unit: String,
    pub volser: String,
}

impl Default for SqlOutput {
    fn default() -> Self {
        Self {
            outflag: "RS".into(),
            dsname: String::new(),
            member: String::new(),
            unit: String::new(),
            volser: String::new(),
        }
    }
}

impl SqlOutput {
    pub fn render(&self) -> String {
        let mut out = format!("SQL_OUTFLAG='{}'", self.outflag);
        for (key, value) in [
            ("SQL_DSNAME", &self.dsname),
            ("SQL_MEMBER", &self.member),
            ("SQL_UNIT", &self.unit),
            ("SQL_VOLSER", &self.volser),
        ] {
            if !value.is_empty() {
                out.push_str(&format!(",{key}='{value}'"));
            }
        }
        out.push(';');
        out
    }
}

/// Destination of the generation report (warnings, messages, SQLCODEs).
/// Defaults to a batch-output temp data set under the TSO user so the
/// report is always available for the post-execute validation; clear
/// `dsname` to skip the report entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RptOutput {
    pub outflag: String,
    pub dsname: String,
    pub member: String,
    pub unit: String,
    pub volser: String,
}

impl RptOutput {
    pub fn new(tso_user: &str) -> Self {
        Self {
            outflag: "BO".into(),
            dsname: format!("{tso_user}.REPORT.TEMP"),
            member: String::new(),
            unit: String::new(),
            volser: String::new(),
        }
    }

    pub fn render(&self) -> String {
        // outflag and dsname always travel together for the report
        let mut out = format!("RPT_OUTFLAG='{}',RPT_DSNAME='{}'", self.outflag, self.dsname);
        for (key, value) in [
            ("RPT_MEMBER", &self.member),
            ("RPT_UNIT", &self.unit),
            ("RPT_VOLSER", &self.volser),
        ] {
            if !value.is_empty() {
                out.push_str(&format!(",{key}='{value}'"));
            }
        }
        out.push(';');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_output_omits_empty_optional_fields() {
        assert_eq!(SqlOutput::default().render(), "SQL_OUTFLAG='RS';");
    }

    #[test]
    fn sql_output_includes_populated_fields() {
        let mut out = SqlOutput::default();
        out.dsname = "TSTUSR.DDL.OUT".into();
        out.member = "GEN01".into();
        assert_eq!(
            out.render(),
            "SQL_OUTFLAG='RS',SQL_DSNAME='TSTUSR.DDL.OUT',SQL_MEMBER='GEN01';"
        );
    }

    #[test]
    fn rpt_output_always_carries_outflag_and_dsname() {
        let out = RptOutput::new("TSTUSR");
        assert_eq!(out.render(), "RPT_OUTFLAG='BO',RPT_DSNAME='TSTUSR.REPORT.TEMP';");
    }

    #[test]
    fn rpt_output_includes_populated_fields() {
        let mut out = RptOutput::new("TSTUSR");
        out.volser = "WRK001".into();
        assert_eq!(
            out.render(),
            "RPT_OUTFLAG='BO',RPT_DSNAME='TSTUSR.REPORT.TEMP',RPT_VOLSER='WRK001';"
        );
    }
}
