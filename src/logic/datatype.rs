use derive_more::{Debug, Display};
use serde::{Deserialize, Serialize};
use std::{convert::Infallible, str::FromStr};

/// Target-language type label carried by literals and schema columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TsType {
    #[display("string")]
    String,
    #[display("number")]
    Number,
    #[display("boolean")]
    Boolean,
    #[display("date")]
    Date,
    #[display("null")]
    Null,
    #[display("object")]
    Object,
    #[display("any")]
    #[serde(other)]
    Any,
}

impl FromStr for TsType {
    type Err = Infallible;

    /// Unknown labels fall back to [`TsType::Any`].
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Ok(match label.trim().to_ascii_lowercase().as_str() {
            "string" => TsType::String,
            "number" => TsType::Number,
            "boolean" => TsType::Boolean,
            "date" => TsType::Date,
            "null" => TsType::Null,
            "object" => TsType::Object,
            _ => TsType::Any,
        })
    }
}

impl TsType {
    /// True if a literal of type `received` may be stored in a column of this
    /// type. `nullable` reports whether the column is optional.
    pub fn accepts(self, received: TsType, nullable: bool) -> bool {
        self == TsType::Any || self == received || (received == TsType::Null && nullable)
    }
}

fn size(value: &Option<usize>) -> String {
    value.map(|v| format!("({v})")).unwrap_or_default()
}

fn members(values: &[String]) -> String {
    values.iter().map(|v| format!("'{v}'")).collect::<Vec<_>>().join(",")
}

/// MySQL column type as declared in the source schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum SqlDataType {
    #[display("tinyint{}", size(_0))]
    TinyInt(Option<usize>),
    #[display("smallint{}", size(_0))]
    SmallInt(Option<usize>),
    #[display("mediumint{}", size(_0))]
    MediumInt(Option<usize>),
    #[display("int{}", size(_0))]
    Int(Option<usize>),
    #[display("integer{}", size(_0))]
    Integer(Option<usize>),
    #[display("bigint{}", size(_0))]
    BigInt(Option<usize>),
    #[display("float")]
    Float,
    #[display("double")]
    Double,
    #[display("decimal{}", size(_0))]
    Decimal(Option<usize>),
    #[display("numeric{}", size(_0))]
    Numeric(Option<usize>),
    #[display("year")]
    Year,
    #[display("char{}", size(_0))]
    Char(Option<usize>),
    #[display("varchar{}", size(_0))]
    VarChar(Option<usize>),
    #[display("tinytext")]
    TinyText,
    #[display("text")]
    Text,
    #[display("mediumtext")]
    MediumText,
    #[display("longtext")]
    LongText,
    #[display("enum({})", members(_0))]
    Enum(Vec<String>),
    #[display("set({})", members(_0))]
    Set(Vec<String>),
    #[display("time")]
    Time,
    #[display("geometry")]
    Geometry,
    #[display("bit{}", size(_0))]
    Bit(Option<usize>),
    #[display("binary{}", size(_0))]
    Binary(Option<usize>),
    #[display("varbinary{}", size(_0))]
    VarBinary(Option<usize>),
    #[display("tinyblob")]
    TinyBlob,
    #[display("blob")]
    Blob,
    #[display("mediumblob")]
    MediumBlob,
    #[display("longblob")]
    LongBlob,
    #[display("json")]
    Json,
    #[display("date")]
    Date,
    #[display("datetime")]
    DateTime,
    #[display("timestamp")]
    Timestamp,
    #[display("{_0}")]
    Other(String),
}

impl FromStr for SqlDataType {
    type Err = Infallible;

    /// Parse a MySQL type label such as `varchar(255)`, `INT UNSIGNED` or
    /// `enum('a','b')`. Labels that are not recognized are kept as
    /// [`SqlDataType::Other`].
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();
        let (base, args) = match label.split_once('(') {
            Some((base, rest)) => (base, rest.rsplit_once(')').map_or(rest, |(args, _)| args)),
            None => (label, ""),
        };
        let base = base
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let width = args.split(',').next().and_then(|w| w.trim().parse().ok());
        let variants = || {
            args.split(',')
                .map(|v| v.trim().trim_matches(['\'', '"']).to_string())
                .filter(|v| !v.is_empty())
                .collect()
        };

        Ok(match base.as_str() {
            "tinyint" => SqlDataType::TinyInt(width),
            "smallint" => SqlDataType::SmallInt(width),
            "mediumint" => SqlDataType::MediumInt(width),
            "int" => SqlDataType::Int(width),
            "integer" => SqlDataType::Integer(width),
            "bigint" => SqlDataType::BigInt(width),
            "float" => SqlDataType::Float,
            "double" => SqlDataType::Double,
            "decimal" => SqlDataType::Decimal(width),
            "numeric" => SqlDataType::Numeric(width),
            "year" => SqlDataType::Year,
            "char" => SqlDataType::Char(width),
            "varchar" => SqlDataType::VarChar(width),
            "tinytext" => SqlDataType::TinyText,
            "text" => SqlDataType::Text,
            "mediumtext" => SqlDataType::MediumText,
            "longtext" => SqlDataType::LongText,
            "enum" => SqlDataType::Enum(variants()),
            "set" => SqlDataType::Set(variants()),
            "time" => SqlDataType::Time,
            "geometry" => SqlDataType::Geometry,
            "bit" => SqlDataType::Bit(width),
            "binary" => SqlDataType::Binary(width),
            "varbinary" => SqlDataType::VarBinary(width),
            "tinyblob" => SqlDataType::TinyBlob,
            "blob" => SqlDataType::Blob,
            "mediumblob" => SqlDataType::MediumBlob,
            "longblob" => SqlDataType::LongBlob,
            "json" => SqlDataType::Json,
            "date" => SqlDataType::Date,
            "datetime" => SqlDataType::DateTime,
            "timestamp" => SqlDataType::Timestamp,
            _ => SqlDataType::Other(label.to_string()),
        })
    }
}

impl SqlDataType {
    /// Target-language type a value of this column is expected to have.
    pub fn ts_type(&self) -> TsType {
        use SqlDataType::*;
        match self {
            Char(_) | VarChar(_) | TinyText | Text | MediumText | LongText | Time | Geometry
            | Set(_) | Enum(_) | TinyBlob | Blob | MediumBlob | LongBlob | Binary(_)
            | VarBinary(_) | Bit(_) => TsType::String,
            SmallInt(_) | MediumInt(_) | Int(_) | Integer(_) | BigInt(_) | Double | Decimal(_)
            | Numeric(_) | Float | Year => TsType::Number,
            TinyInt(_) => TsType::Boolean,
            Json => TsType::Object,
            Date | DateTime | Timestamp => TsType::Date,
            Other(_) => TsType::Any,
        }
    }
}

/// Shorthand for `label.parse::<SqlDataType>()?.ts_type()`.
pub fn sql_type_to_ts_type(label: &str) -> TsType {
    match label.parse::<SqlDataType>() {
        Ok(data_type) => data_type.ts_type(),
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("varchar(255)", TsType::String)]
    #[case("CHAR(2)", TsType::String)]
    #[case("longtext", TsType::String)]
    #[case("enum('a','b')", TsType::String)]
    #[case("set('x')", TsType::String)]
    #[case("time", TsType::String)]
    #[case("varbinary(16)", TsType::String)]
    #[case("bit(1)", TsType::String)]
    #[case("int(11)", TsType::Number)]
    #[case("INT UNSIGNED", TsType::Number)]
    #[case("bigint(20) unsigned", TsType::Number)]
    #[case("decimal(10,2)", TsType::Number)]
    #[case("double", TsType::Number)]
    #[case("year", TsType::Number)]
    #[case("tinyint(1)", TsType::Boolean)]
    #[case("json", TsType::Object)]
    #[case("datetime", TsType::Date)]
    #[case("timestamp", TsType::Date)]
    #[case("date", TsType::Date)]
    #[case("point", TsType::Any)]
    #[case("", TsType::Any)]
    fn maps_sql_labels_to_ts_types(#[case] label: &str, #[case] expected: TsType) {
        assert_eq!(sql_type_to_ts_type(label), expected);
    }

    #[rstest]
    #[case("VARCHAR(255)", "varchar(255)")]
    #[case("int", "int")]
    #[case("enum( 'a', \"b\" )", "enum('a','b')")]
    #[case("decimal(10,2)", "decimal(10)")]
    #[case("point", "point")]
    fn displays_normalized_label(#[case] label: &str, #[case] expected: &str) {
        let parsed: SqlDataType = label.parse().unwrap();
        assert_eq!(parsed.to_string(), expected);
    }

    #[rstest]
    #[case("string", TsType::String)]
    #[case("Number", TsType::Number)]
    #[case("date", TsType::Date)]
    #[case("whatever", TsType::Any)]
    fn parses_ts_labels(#[case] label: &str, #[case] expected: TsType) {
        assert_eq!(label.parse::<TsType>().unwrap(), expected);
    }

    #[test]
    fn ts_type_round_trips_through_json() {
        let json = serde_json::to_string(&TsType::Boolean).unwrap();
        assert_eq!(json, "\"boolean\"");
        let back: TsType = serde_json::from_str("\"unknown-label\"").unwrap();
        assert_eq!(back, TsType::Any);
    }

    #[rstest]
    #[case(TsType::String, TsType::String, false, true)]
    #[case(TsType::String, TsType::Number, false, false)]
    #[case(TsType::String, TsType::Null, true, true)]
    #[case(TsType::String, TsType::Null, false, false)]
    #[case(TsType::Any, TsType::Boolean, false, true)]
    fn acceptance_rules(
        #[case] expected: TsType,
        #[case] received: TsType,
        #[case] nullable: bool,
        #[case] accepted: bool,
    ) {
        assert_eq!(expected.accepts(received, nullable), accepted);
    }
}
