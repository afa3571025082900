//! End-to-end harness tests with a faked subsystem: a canned result set
//! behind `GenCaller` and a canned report behind `ReportSource`.

use std::sync::Mutex;

use async_trait::async_trait;

use adbgen::client::zosmf::ReportSource;
use adbgen::client::{GenCaller, ProcedureArgs};
use adbgen::config::GenDefaults;
use adbgen::error::GenError;
use adbgen::gen::{Gen, REPORT_BANNER};

struct FakeCaller {
    rows: Vec<Vec<String>>,
    captured: Mutex<Option<ProcedureArgs>>,
}

impl FakeCaller {
    fn returning(lines: &[&str]) -> Self {
        let rows = lines
            .iter()
            .enumerate()
            .map(|(i, l)| vec![(i + 1).to_string(), l.to_string()])
            .collect();
        Self { rows, captured: Mutex::new(None) }
    }
}

#[async_trait]
impl GenCaller for FakeCaller {
    async fn call(&self, args: &ProcedureArgs) -> adbgen::Result<Vec<Vec<String>>> {
        *self.captured.lock().unwrap() = Some(args.clone());
        Ok(self.rows.clone())
    }
}

struct FakeReports {
    text: String,
}

#[async_trait]
impl ReportSource for FakeReports {
    async fn read_dataset(&self, _dsname: &str) -> adbgen::Result<String> {
        Ok(self.text.clone())
    }
}

fn defaults() -> GenDefaults {
    GenDefaults {
        lpar: "SYSA".into(),
        subsystem: "DSN1".into(),
        db2_release: "1315".into(),
        tso_user: "TSTUSR".into(),
        accept_level: "V13R1M500".into(),
        sqlid: "TSTUSR".into(),
    }
}

fn ok_report() -> FakeReports {
    FakeReports { text: format!("{REPORT_BANNER}\nGEN completed\nJob OK\n") }
}

#[tokio::test]
async fn execute_fails_on_empty_request_list() {
    let mut gen = Gen::new(&defaults());
    let caller = FakeCaller::returning(&["CREATE TABLE X;"]);
    let err = gen.execute(&caller, Some(&ok_report())).await.unwrap_err();
    assert!(matches!(err, GenError::Configuration(_)), "got {err}");
}

#[tokio::test]
async fn happy_path_captures_args_and_stores_ddl() {
    let mut gen = Gen::new(&defaults());
    gen.requests.add_table("QUALA", "TB1");
    gen.requests.add_table("QUALA", "TB2");
    gen.options.set_all_gen("Y");
    gen.debug_proc = true;

    let caller = FakeCaller::returning(&[
        "CREATE TABLE QUALA.TB1 (C1 INT);",
        "CREATE TABLE QUALA.TB2 (C2 INT);",
    ]);
    gen.execute(&caller, Some(&ok_report())).await.unwrap();

    let args = caller.captured.lock().unwrap().clone().unwrap();
    assert!(args.parameter_list.starts_with("DB2SYS='DSN1',DB2REL='1315'"));
    assert!(args.parameter_list.contains("GENTABLE='Y'"));
    assert!(args.parameter_list.ends_with(';'));
    assert_eq!(
        args.request_list,
        "TYPE='TB',QUAL='QUALA',NAME='TB1';TYPE='TB',QUAL='QUALA',NAME='TB2';"
    );
    assert_eq!(args.sql_output_list, "SQL_OUTFLAG='RS';");
    assert_eq!(args.rpt_output_list, "RPT_OUTFLAG='BO',RPT_DSNAME='TSTUSR.REPORT.TEMP';");
    assert_eq!(args.debug_mode, "DEBUG");
    assert_eq!(args.return_code, "");

    assert_eq!(gen.ddl_as_array().unwrap().len(), 2);
    assert_eq!(
        gen.ddl_as_string().unwrap(),
        "CREATE TABLE QUALA.TB1 (C1 INT);\nCREATE TABLE QUALA.TB2 (C2 INT);\n"
    );
    assert!(gen.report_as_string().unwrap().contains("Job OK"));
}

#[tokio::test]
async fn checklist_assertions_run_over_fetched_ddl() {
    let mut gen = Gen::new(&defaults());
    gen.requests.add_table("Q", "A");

    let caller = FakeCaller::returning(&["CREATE TABLE A COL1;CREATE TABLE B COL2;"]);
    gen.execute(&caller, Some(&ok_report())).await.unwrap();

    gen.assert_text_between_terminators(&[&["CREATE TABLE A", "COL1"]], ';').unwrap();

    let err = gen
        .assert_text_between_terminators(&[&["CREATE TABLE A", "COL2"]], ';')
        .unwrap_err();
    match err {
        GenError::ChecklistMismatch { position, .. } => assert_eq!(position, 2),
        other => panic!("expected ChecklistMismatch, got {other}"),
    }
}

#[tokio::test]
async fn report_assertions_match_spec_examples() {
    let mut gen = Gen::new(&defaults());
    gen.requests.add_table("Q", "A");
    let caller = FakeCaller::returning(&["CREATE TABLE A;"]);
    let reports = FakeReports { text: format!("{REPORT_BANNER}\nJob OK\n") };
    gen.execute(&caller, Some(&reports)).await.unwrap();

    gen.assert_text_in_report(&["OK"]).unwrap();
    gen.assert_text_not_in_report(&["ERROR"]).unwrap();

    let err = gen.assert_text_in_report(&["ERROR"]).unwrap_err();
    match err {
        GenError::ReportMissingText { line, report } => {
            assert_eq!(line, "ERROR");
            assert!(report.contains("Job OK"));
        }
        other => panic!("expected ReportMissingText, got {other}"),
    }
}

#[tokio::test]
async fn missing_banner_fails_validation_and_blocks_results() {
    let mut gen = Gen::new(&defaults());
    gen.requests.add_table("Q", "A");
    let caller = FakeCaller::returning(&["CREATE TABLE A;"]);
    let reports = FakeReports { text: "some unrelated output\n".into() };

    let err = gen.execute(&caller, Some(&reports)).await.unwrap_err();
    assert!(matches!(err, GenError::ReportValidation { .. }), "got {err}");
    // The run never completed, so results stay inaccessible.
    assert!(matches!(gen.ddl_as_string(), Err(GenError::NotExecuted)));
}

#[tokio::test]
async fn bind_failure_in_report_fails_validation() {
    for marker in ["SQLCODE=-805", "SQLCODE = -805"] {
        let mut gen = Gen::new(&defaults());
        gen.requests.add_table("Q", "A");
        let caller = FakeCaller::returning(&["CREATE TABLE A;"]);
        let reports = FakeReports { text: format!("{REPORT_BANNER}\nDSNT408I {marker}\n") };

        let err = gen.execute(&caller, Some(&reports)).await.unwrap_err();
        match err {
            GenError::ReportValidation { detail, report } => {
                assert!(detail.contains(marker));
                assert!(report.contains("DSNT408I"));
            }
            other => panic!("expected ReportValidation, got {other}"),
        }
    }
}

#[tokio::test]
async fn no_report_destination_skips_fetch_and_guard() {
    let mut gen = Gen::new(&defaults());
    gen.requests.add_table("Q", "A");
    gen.rpt_output.dsname.clear();

    let caller = FakeCaller::returning(&["CREATE TABLE A;"]);
    gen.execute(&caller, None::<&FakeReports>).await.unwrap();

    assert_eq!(gen.report_as_string().unwrap(), "");
    let err = gen.assert_text_in_report(&["OK"]).unwrap_err();
    assert!(matches!(err, GenError::Configuration(_)), "got {err}");
}

#[tokio::test]
async fn configured_report_without_source_is_a_configuration_error() {
    let mut gen = Gen::new(&defaults());
    gen.requests.add_table("Q", "A");
    let caller = FakeCaller::returning(&["CREATE TABLE A;"]);

    let err = gen.execute(&caller, None::<&FakeReports>).await.unwrap_err();
    assert!(matches!(err, GenError::Configuration(_)), "got {err}");
}

#[tokio::test]
async fn result_row_without_ddl_column_is_a_procedure_error() {
    let mut gen = Gen::new(&defaults());
    gen.requests.add_table("Q", "A");
    let caller = FakeCaller {
        rows: vec![vec!["1".to_string()]],
        captured: Mutex::new(None),
    };

    let err = gen.execute(&caller, Some(&ok_report())).await.unwrap_err();
    assert!(matches!(err, GenError::Procedure(_)), "got {err}");
}

#[tokio::test]
async fn retarget_points_the_run_at_another_subsystem() {
    let mut gen = Gen::new(&defaults());
    gen.retarget("DSN2");
    gen.requests.add_database("DB01");

    let caller = FakeCaller::returning(&["CREATE DATABASE DB01;"]);
    gen.execute(&caller, Some(&ok_report())).await.unwrap();

    let args = caller.captured.lock().unwrap().clone().unwrap();
    assert!(args.parameter_list.starts_with("DB2SYS='DSN2'"));
    assert!(args.parameter_list.contains("DB2SERV='SYSADSN2'"));
}
