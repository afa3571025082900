use clap::{ArgGroup, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "adbgen", about = "Generate DDL for Db2 catalog objects via ADB2RE", version)]
#[command(group(ArgGroup::new("report").args(["report_ds", "no_report"]).multiple(false)))]
pub struct Cli {
    /// Db2 subsystem to run against (defaults to DB2_SUBSYSTEM_ID).
    #[arg(long)]
    pub ssid: Option<String>,

    /// Table to generate, as QUALIFIER.NAME. Repeatable.
    #[arg(long = "table", value_name = "QUAL.NAME")]
    pub tables: Vec<String>,

    /// View to generate, as QUALIFIER.NAME. Repeatable.
    #[arg(long = "view", value_name = "QUAL.NAME")]
    pub views: Vec<String>,

    /// Index to generate, as QUALIFIER.NAME. Repeatable.
    #[arg(long = "index", value_name = "QUAL.NAME")]
    pub indexes: Vec<String>,

    /// Alias to generate, as QUALIFIER.NAME. Repeatable.
    #[arg(long = "alias", value_name = "QUAL.NAME")]
    pub aliases: Vec<String>,

    /// Synonym to generate, as QUALIFIER.NAME. Repeatable.
    #[arg(long = "synonym", value_name = "QUAL.NAME")]
    pub synonyms: Vec<String>,

    /// Trigger to generate, as QUALIFIER.NAME. Repeatable.
    #[arg(long = "trigger", value_name = "QUAL.NAME")]
    pub triggers: Vec<String>,

    /// User-defined type to generate, as QUALIFIER.NAME. Repeatable.
    #[arg(long = "udt", value_name = "QUAL.NAME")]
    pub udts: Vec<String>,

    /// User-defined function to generate, as QUALIFIER.NAME. Repeatable.
    #[arg(long = "udf", value_name = "QUAL.NAME")]
    pub udfs: Vec<String>,

    /// Stored procedure to generate, as QUALIFIER.NAME. Repeatable.
    #[arg(long = "procedure", value_name = "QUAL.NAME")]
    pub procedures: Vec<String>,

    /// Sequence to generate, as QUALIFIER.NAME. Repeatable.
    #[arg(long = "sequence", value_name = "QUAL.NAME")]
    pub sequences: Vec<String>,

    /// Sequence alias to generate, as SCHEMA.NAME. Repeatable.
    #[arg(long = "sequence-alias", value_name = "SCHEMA.NAME")]
    pub sequence_aliases: Vec<String>,

    /// Table space to generate, as DBNAME.TSNAME. Repeatable.
    #[arg(long = "tablespace", value_name = "DB.TS")]
    pub tablespaces: Vec<String>,

    /// Database to generate. Repeatable.
    #[arg(long = "database", value_name = "NAME")]
    pub databases: Vec<String>,

    /// Storage group to generate. Repeatable.
    #[arg(long = "stogroup", value_name = "NAME")]
    pub stogroups: Vec<String>,

    /// Schema to generate. Repeatable.
    #[arg(long = "schema", value_name = "NAME")]
    pub schemas: Vec<String>,

    /// Set every GEN option to this value.
    #[arg(long = "all-gen", value_name = "Y|N", num_args = 0..=1, default_missing_value = "Y")]
    pub all_gen: Option<String>,

    /// Set every GRANT option to this value.
    #[arg(long = "all-grants", value_name = "Y|N", num_args = 0..=1, default_missing_value = "Y")]
    pub all_grants: Option<String>,

    /// Also generate catalog statistics (CATALOGSTATISTICS='Y').
    #[arg(long)]
    pub statistics: bool,

    /// Report data set name (default <tsoid>.REPORT.TEMP).
    #[arg(long = "report-ds", value_name = "DSNAME")]
    pub report_ds: Option<String>,

    /// Skip the report data set and its automatic validation.
    #[arg(long = "no-report")]
    pub no_report: bool,

    /// Run the stored procedure in DEBUG mode.
    #[arg(long = "debug-proc")]
    pub debug_proc: bool,

    /// Checklist row the generated DDL must satisfy: items separated by
    /// '|', all of which must land in one statement. Repeatable.
    #[arg(long = "expect", value_name = "ITEM|ITEM|...")]
    pub expect: Vec<String>,
}
