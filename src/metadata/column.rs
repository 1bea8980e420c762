use super::*;

/// Column as declared in the schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ColumnDef")]
pub struct SchemaColumn {
    pub name: String,
    pub sql_type: String,
    pub ts_type: TsType,
    /// Nullable columns accept `null` values.
    pub optional: bool,
}

impl SchemaColumn {
    /// Column whose target type is derived from `sql_type`.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        let sql_type = sql_type.into();
        Self {
            name: name.into(),
            ts_type: sql_type_to_ts_type(&sql_type),
            sql_type,
            optional: false,
        }
    }

    /// Column with an explicit target type and no source type.
    pub fn typed(name: impl Into<String>, ts_type: TsType) -> Self {
        Self {
            name: name.into(),
            sql_type: String::new(),
            ts_type,
            optional: false,
        }
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

/// On-disk shape; `tsType` may be omitted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColumnDef {
    name: String,
    #[serde(default)]
    sql_type: String,
    ts_type: Option<TsType>,
    #[serde(default)]
    optional: bool,
}

impl From<ColumnDef> for SchemaColumn {
    fn from(def: ColumnDef) -> Self {
        Self {
            ts_type: def
                .ts_type
                .unwrap_or_else(|| sql_type_to_ts_type(&def.sql_type)),
            name: def.name,
            sql_type: def.sql_type,
            optional: def.optional,
        }
    }
}
