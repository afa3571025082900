//! The ADB2RE option set and its sparse rendering.
//!
//! The procedure accepts a sparse parameter list, so only options whose
//! current value differs from the seeded default are sent; `DB2SYS` and
//! `DB2REL` are required and always lead the list. Comparisons are value
//! equality against a snapshot taken at construction.

use crate::config::GenDefaults;

/// Every option ADB2RE understands, with its current value. Fields are
/// public so a check can poke individual flags before `execute`, the same
/// way the option panels expose them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenOptions {
    // General Db2 options
    pub db2sys: String,
    pub db2aloc: String,
    pub db2serv: String,
    pub db2auth: String,
    pub db2rel: String,

    // Options to generate DDL statements
    pub gensg: String,
    pub gendb: String,
    pub gents: String,
    pub gentable: String,
    pub genview: String,
    pub genindex: String,
    pub gensyn: String,
    pub genalias: String,
    pub genudt: String,
    pub genudf: String,
    pub genstp: String,
    pub genseq: String,
    pub genvar: String,
    pub genlabel: String,
    pub gencomm: String,
    pub genrels: String,
    pub gentrig: String,
    pub gentrust: String,
    pub genrole: String,
    pub genmask: String,
    pub genperm: String,
    pub genseqal: String,

    // Options to generate GRANT statements
    pub grantsg: String,
    pub grantdb: String,
    pub grantts: String,
    pub granttab: String,
    pub grantvw: String,
    pub grantsch: String,
    pub grantudt: String,
    pub grantudf: String,
    pub grantstp: String,
    pub grantseq: String,
    pub grantvar: String,

    // Additional options to generate statements
    pub accept_fl: String,
    pub actvcntl: String,
    pub catalogstatistics: String,
    pub tcatqual: String,
    pub tgtfl: String,

    // GENSTATS.* statistics options
    pub syscoldist: String,
    pub syscoldiststats: String,
    pub syscolstats: String,
    pub syscolumns: String,
    pub sysindexes: String,
    pub sysindexpart: String,
    pub sysindexstats: String,
    pub syslobstats: String,
    pub systablepart: String,
    pub systables: String,
    pub systablespace: String,
    pub sysindexspacestats: String,
    pub systablespacestats: String,
    pub syskeytgtdiststats: String,
    pub syskeytargetstats: String,
    pub syskeytgtdist: String,
    pub sysroutines: String,

    // Options to change DDL during generation
    pub newgrantor: String,
    pub newdb: String,
    pub newtssg: String,
    pub newixsg: String,
    pub newsqlid: String,

    // Additional options to customize the DDL
    pub pendchgs: String,
    pub spcalloc: String,
    pub tgtdb2: String,
    pub defaults: String,
    pub commitfr: String,
    pub runsqlid: String,
    pub sqlcmts: String,
}

impl GenOptions {
    /// Initial option values for one run. Config-derived defaults (target
    /// subsystem, release, auth id, accept level) come from the snapshot;
    /// everything else uses the procedure's documented defaults.
    pub fn seeded(d: &GenDefaults) -> Self {
        let n = || "N".to_string();
        let y = || "Y".to_string();
        let empty = String::new;
        Self {
            db2sys: d.subsystem.clone(),
            db2aloc: empty(),
            db2serv: d.server_location(&d.subsystem),
            db2auth: d.tso_user.clone(),
            db2rel: d.db2_release.clone(),

            gensg: n(),
            gendb: n(),
            gents: n(),
            gentable: n(),
            genview: n(),
            genindex: n(),
            gensyn: n(),
            genalias: n(),
            genudt: n(),
            genudf: n(),
            genstp: n(),
            genseq: n(),
            genvar: n(),
            genlabel: n(),
            gencomm: n(),
            genrels: n(),
            gentrig: n(),
            gentrust: n(),
            genrole: n(),
            genmask: n(),
            genperm: n(),
            genseqal: n(),

            grantsg: n(),
            grantdb: n(),
            grantts: n(),
            granttab: n(),
            grantvw: n(),
            grantsch: n(),
            grantudt: n(),
            grantudf: n(),
            grantstp: n(),
            grantseq: n(),
            grantvar: n(),

            accept_fl: d.accept_level.clone(),
            actvcntl: n(),
            catalogstatistics: n(),
            tcatqual: empty(),
            tgtfl: d.accept_level.clone(),

            syscoldist: y(),
            syscoldiststats: y(),
            syscolstats: y(),
            syscolumns: y(),
            sysindexes: y(),
            sysindexpart: y(),
            sysindexstats: y(),
            syslobstats: y(),
            systablepart: y(),
            systables: y(),
            systablespace: y(),
            sysindexspacestats: y(),
            systablespacestats: y(),
            syskeytgtdiststats: y(),
            syskeytargetstats: y(),
            syskeytgtdist: y(),
            sysroutines: y(),

            newgrantor: empty(),
            newdb: empty(),
            newtssg: empty(),
            newixsg: empty(),
            newsqlid: empty(),

            pendchgs: y(),
            spcalloc: "DEFINED".into(),
            tgtdb2: d.db2_release.clone(),
            defaults: "K".into(),
            commitfr: "A".into(),
            runsqlid: empty(),
            sqlcmts: n(),
        }
    }

    /// Set every GEN flag to `value` (usually `Y`).
    pub fn set_all_gen(&mut self, value: &str) {
        for f in [
            &mut self.gensg,
            &mut self.gendb,
            &mut self.gents,
            &mut self.gentable,
            &mut self.genview,
            &mut self.genindex,
            &mut self.gensyn,
            &mut self.genalias,
            &mut self.genudt,
            &mut self.genudf,
            &mut self.genstp,
            &mut self.genseq,
            &mut self.genvar,
            &mut self.genlabel,
            &mut self.gencomm,
            &mut self.genrels,
            &mut self.gentrig,
            &mut self.gentrust,
            &mut self.genrole,
            &mut self.genmask,
            &mut self.genperm,
            &mut self.genseqal,
        ] {
            *f = value.to_string();
        }
    }

    /// Set every GRANT flag to `value`.
    pub fn set_all_grants(&mut self, value: &str) {
        for f in [
            &mut self.grantsg,
            &mut self.grantdb,
            &mut self.grantts,
            &mut self.granttab,
            &mut self.grantvw,
            &mut self.grantsch,
            &mut self.grantudt,
            &mut self.grantudf,
            &mut self.grantstp,
            &mut self.grantseq,
            &mut self.grantvar,
        ] {
            *f = value.to_string();
        }
    }

    /// Re-point the general options at another subsystem on the same LPAR.
    pub fn retarget(&mut self, lpar: &str, ssid: &str) {
        self.db2sys = ssid.to_string();
        self.db2aloc.clear();
        self.db2serv = format!("{lpar}{ssid}");
    }

    /// Render the sparse `KEY='VALUE',...;` parameter list. `seeded` is the
    /// snapshot taken at construction; only deltas against it are emitted.
    pub fn render_parameters(&self, seeded: &GenOptions) -> String {
        let mut out = format!("DB2SYS='{}',DB2REL='{}'", self.db2sys, self.db2rel);
        for ((key, current), (_, default)) in self.entries().into_iter().zip(seeded.entries()) {
            if current != default {
                out.push_str(&format!(",{key}='{current}'"));
            }
        }
        out.push(';');
        out
    }

    // One place defines emission order; render zips two of these.
    fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("DB2ALOC", &self.db2aloc),
            ("DB2SERV", &self.db2serv),
            ("DB2AUTH", &self.db2auth),
            ("GENSG", &self.gensg),
            ("GENDB", &self.gendb),
            ("GENTS", &self.gents),
            ("GENTABLE", &self.gentable),
            ("GENVIEW", &self.genview),
            ("GENINDEX", &self.genindex),
            ("GENSYN", &self.gensyn),
            ("GENALIAS", &self.genalias),
            ("GENUDT", &self.genudt),
            ("GENUDF", &self.genudf),
            ("GENSTP", &self.genstp),
            ("GENSEQ", &self.genseq),
            ("GENVAR", &self.genvar),
            ("GENLABEL", &self.genlabel),
            ("GENCOMM", &self.gencomm),
            ("GENRELS", &self.genrels),
            ("GENTRIG", &self.gentrig),
            ("GENTRUST", &self.gentrust),
            ("GENROLE", &self.genrole),
            ("GENMASK", &self.genmask),
            ("GENPERM", &self.genperm),
            ("GENSEQAL", &self.genseqal),
            ("GRANTSG", &self.grantsg),
            ("GRANTDB", &self.grantdb),
            ("GRANTTS", &self.grantts),
            ("GRANTTAB", &self.granttab),
            ("GRANTVW", &self.grantvw),
            ("GRANTSCH", &self.grantsch),
            ("GRANTUDT", &self.grantudt),
            ("GRANTUDF", &self.grantudf),
            ("GRANTSTP", &self.grantstp),
            ("GRANTSEQ", &self.grantseq),
            ("GRANTVAR", &self.grantvar),
            ("ACCEPT_FL", &self.accept_fl),
            ("ACTVCNTL", &self.actvcntl),
            ("CATALOGSTATISTICS", &self.catalogstatistics),
            ("TCATQUAL", &self.tcatqual),
            ("TGTFL", &self.tgtfl),
            ("GENSTATS.SYSCOLDIST", &self.syscoldist),
            ("GENSTATS.SYSCOLDISTSTATS", &self.syscoldiststats),
            ("GENSTATS.SYSCOLSTATS", &self.syscolstats),
            ("GENSTATS.SYSCOLUMNS", &self.syscolumns),
            ("GENSTATS.SYSINDEXES", &self.sysindexes),
            ("GENSTATS.SYSINDEXPART", &self.sysindexpart),
            ("GENSTATS.SYSINDEXSTATS", &self.sysindexstats),
            ("GENSTATS.SYSLOBSTATS", &self.syslobstats),
            ("GENSTATS.SYSTABLEPART", &self.systablepart),
            ("GENSTATS.SYSTABLES", &self.systables),
            ("GENSTATS.SYSTABLESPACE", &self.systablespace),
            ("GENSTATS.SYSINDEXSPACESTATS", &self.sysindexspacestats),
            ("GENSTATS.SYSTABLESPACESTATS", &self.systablespacestats),
            ("GENSTATS.SYSKEYTGTDISTSTATS", &self.syskeytgtdiststats),
            ("GENSTATS.SYSKEYTARGETSTATS", &self.syskeytargetstats),
            ("GENSTATS.SYSKEYTGTDIST", &self.syskeytgtdist),
            ("GENSTATS.SYSROUTINES", &self.sysroutines),
            ("NEWGRANTOR", &self.newgrantor),
            ("NEWDB", &self.newdb),
            ("NEWTSSG", &self.newtssg),
            ("NEWIXSG", &self.newixsg),
            ("NEWSQLID", &self.newsqlid),
            ("PENDCHGS", &self.pendchgs),
            ("SPCALLOC", &self.spcalloc),
            ("TGTDB2", &self.tgtdb2),
            ("DEFAULTS", &self.defaults),
            ("COMMITFR", &self.commitfr),
            ("RUNSQLID", &self.runsqlid),
            ("SQLCMTS", &self.sqlcmts),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn untouched_options_render_only_required_fields() {
        let seeded = GenOptions::seeded(&defaults());
        let current = seeded.clone();
        assert_eq!(
            current.render_parameters(&seeded),
            "DB2SYS='DSN1',DB2REL='1315';"
        );
    }

    #[test]
    fn only_deltas_are_emitted_in_fixed_order() {
        let seeded = GenOptions::seeded(&defaults());
        let mut current = seeded.clone();
        current.gentable = "Y".into();
        current.grantvw = "Y".into();
        current.systables = "N".into();
        assert_eq!(
            current.render_parameters(&seeded),
            "DB2SYS='DSN1',DB2REL='1315',GENTABLE='Y',GRANTVW='Y',GENSTATS.SYSTABLES='N';"
        );
    }

    #[test]
    fn resetting_to_default_suppresses_the_option_again() {
        let seeded = GenOptions::seeded(&defaults());
        let mut current = seeded.clone();
        current.pendchgs = "N".into();
        assert!(current.render_parameters(&seeded).contains("PENDCHGS='N'"));
        current.pendchgs = "Y".into();
        assert_eq!(
            current.render_parameters(&seeded),
            "DB2SYS='DSN1',DB2REL='1315';"
        );
    }

    #[test]
    fn set_all_gen_flips_every_gen_flag() {
        let seeded = GenOptions::seeded(&defaults());
        let mut current = seeded.clone();
        current.set_all_gen("Y");
        let rendered = current.render_parameters(&seeded);
        for key in [
            "GENSG", "GENDB", "GENTS", "GENTABLE", "GENVIEW", "GENINDEX", "GENSYN", "GENALIAS",
            "GENUDT", "GENUDF", "GENSTP", "GENSEQ", "GENVAR", "GENLABEL", "GENCOMM", "GENRELS",
            "GENTRIG", "GENTRUST", "GENROLE", "GENMASK", "GENPERM", "GENSEQAL",
        ] {
            assert!(rendered.contains(&format!("{key}='Y'")), "missing {key} in {rendered}");
        }
        // GRANT flags untouched
        assert!(!rendered.contains("GRANTSG"));
    }

    #[test]
    fn set_all_grants_flips_every_grant_flag() {
        let seeded = GenOptions::seeded(&defaults());
        let mut current = seeded.clone();
        current.set_all_grants("Y");
        let rendered = current.render_parameters(&seeded);
        for key in [
            "GRANTSG", "GRANTDB", "GRANTTS", "GRANTTAB", "GRANTVW", "GRANTSCH", "GRANTUDT",
            "GRANTUDF", "GRANTSTP", "GRANTSEQ", "GRANTVAR",
        ] {
            assert!(rendered.contains(&format!("{key}='Y'")), "missing {key} in {rendered}");
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let seeded = GenOptions::seeded(&defaults());
        let mut current = seeded.clone();
        current.set_all_gen("Y");
        current.newdb = "NEWDB01".into();
        assert_eq!(
            current.render_parameters(&seeded),
            current.render_parameters(&seeded)
        );
    }

    #[test]
    fn retarget_repoints_subsystem_fields() {
        let seeded = GenOptions::seeded(&defaults());
        let mut current = seeded.clone();
        current.retarget("SYSA", "DSN2");
        let rendered = current.render_parameters(&seeded);
        assert!(rendered.starts_with("DB2SYS='DSN2'"));
        assert!(rendered.contains("DB2SERV='SYSADSN2'"));
    }
}
