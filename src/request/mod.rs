//! The request list: which catalog objects to reverse-engineer.
//!
//! Typed descriptors accumulated in insertion order, rendered on demand
//! into the `TYPE='..',QUAL='..',NAME='..';` entries the procedure parses.
//! Names are passed through untouched; the caller owns their correctness.

/// ADB2RE object type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    StorageGroup,
    Database,
    Tablespace,
    Table,
    View,
    Alias,
    Index,
    UserDefinedType,
    UserDefinedFunction,
    StoredProcedure,
    Sequence,
    Trigger,
    Synonym,
}

impl ObjectKind {
    pub fn code(self) -> &'static str {
        match self {
            ObjectKind::StorageGroup => "SG",
            ObjectKind::Database => "DB",
            ObjectKind::Tablespace => "TS",
            ObjectKind::Table => "TB",
            ObjectKind::View => "VW",
            ObjectKind::Alias => "AL",
            ObjectKind::Index => "IX",
            ObjectKind::UserDefinedType => "DT",
            ObjectKind::UserDefinedFunction => "FU",
            ObjectKind::StoredProcedure => "SP",
            ObjectKind::Sequence => "SQ",
            ObjectKind::Trigger => "TG",
            ObjectKind::Synonym => "SY",
        }
    }
}

/// One requested object. Storage groups and databases carry no qualifier;
/// schemas and sequence aliases use the `SCH=` entry form instead of a
/// `TYPE=` code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectRef {
    Object {
        kind: ObjectKind,
        qualifier: Option<String>,
        name: String,
    },
    Schema {
        name: String,
    },
    SequenceAlias {
        schema: String,
        name: String,
    },
}

impl ObjectRef {
    fn render(&self) -> String {
        match self {
            ObjectRef::Object { kind, qualifier: Some(qual), name } => {
                format!("TYPE='{}',QUAL='{}',NAME='{}';", kind.code(), qual, name)
            }
            ObjectRef::Object { kind, qualifier: None, name } => {
                format!("TYPE='{}',NAME='{}';", kind.code(), name)
            }
            ObjectRef::Schema { name } => format!("SCH='{name}';"),
            ObjectRef::SequenceAlias { schema, name } => {
                format!("SCH='{schema}',SEQ='{name}';")
            }
        }
    }
}

/// Append-only list of requested objects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestList {
    items: Vec<ObjectRef>,
}

impl RequestList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize every descriptor in insertion order, one `;`-terminated
    /// entry each.
    pub fn render(&self) -> String {
        self.items.iter().map(ObjectRef::render).collect()
    }

    fn push_object(&mut self, kind: ObjectKind, qualifier: Option<&str>, name: &str) {
        self.items.push(ObjectRef::Object {
            kind,
            qualifier: qualifier.map(str::to_string),
            name: name.to_string(),
        });
    }

    pub fn add_stogroup(&mut self, name: &str) {
        self.push_object(ObjectKind::StorageGroup, None, name);
    }

    pub fn add_database(&mut self, name: &str) {
        self.push_object(ObjectKind::Database, None, name);
    }

    /// Table spaces are qualified by their database.
    pub fn add_tablespace(&mut self, dbname: &str, tsname: &str) {
        self.push_object(ObjectKind::Tablespace, Some(dbname), tsname);
    }

    pub fn add_table(&mut self, qual: &str, name: &str) {
        self.push_object(ObjectKind::Table, Some(qual), name);
    }

    pub fn add_view(&mut self, qual: &str, name: &str) {
        self.push_object(ObjectKind::View, Some(qual), name);
    }

    pub fn add_alias(&mut self, qual: &str, name: &str) {
        self.push_object(ObjectKind::Alias, Some(qual), name);
    }

    pub fn add_index(&mut self, qual: &str, name: &str) {
        self.push_object(ObjectKind::Index, Some(qual), name);
    }

    pub fn add_user_defined_type(&mut self, qual: &str, name: &str) {
        self.push_object(ObjectKind::UserDefinedType, Some(qual), name);
    }

    pub fn add_user_defined_function(&mut self, qual: &str, name: &str) {
        self.push_object(ObjectKind::UserDefinedFunction, Some(qual), name);
    }

    pub fn add_stored_procedure(&mut self, qual: &str, name: &str) {
        self.push_object(ObjectKind::StoredProcedure, Some(qual), name);
    }

    pub fn add_sequence(&mut self, qual: &str, name: &str) {
        self.push_object(ObjectKind::Sequence, Some(qual), name);
    }

    pub fn add_trigger(&mut self, qual: &str, name: &str) {
        self.push_object(ObjectKind::Trigger, Some(qual), name);
    }

    pub fn add_synonym(&mut self, qual: &str, name: &str) {
        self.push_object(ObjectKind::Synonym, Some(qual), name);
    }

    pub fn add_schema(&mut self, name: &str) {
        self.items.push(ObjectRef::Schema { name: name.to_string() });
    }

    pub fn add_sequence_alias(&mut self, schema: &str, name: &str) {
        self.items.push(ObjectRef::SequenceAlias {
            schema: schema.to_string(),
            name: name.to_string(),
        });
    }
}
