//! MySQL keyword list used for syntax-error classification and completion.
//!
//! The list covers the MySQL 5.7 reserved words plus the column type names
//! that show up in `CREATE TABLE` bodies. A word found here is reported as a
//! reserved keyword when the parser trips on it, and is the candidate pool for
//! "did you mean" corrections of unidentified words.
//!
//! Design notes:
//! - Entries are stored upper-cased; matching is ASCII case-insensitive so no
//!   allocation is needed per lookup.
//! - Order matters: the fuzzy matcher keeps the first candidate on distance
//!   ties, so more common statement keywords come first.

pub const KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "INSERT", "INTO", "VALUES", "UPDATE", "SET", "DELETE", "CREATE",
    "ALTER", "DROP", "TABLE", "DATABASE", "INDEX", "JOIN", "INNER", "LEFT", "RIGHT", "OUTER",
    "CROSS", "NATURAL", "ON", "USING", "AS", "AND", "OR", "NOT", "NULL", "IS", "IN", "LIKE",
    "BETWEEN", "EXISTS", "CASE", "WHEN", "THEN", "ELSE", "END", "GROUP", "BY", "ORDER", "ASC",
    "DESC", "HAVING", "LIMIT", "OFFSET", "UNION", "ALL", "DISTINCT", "DISTINCTROW", "USE",
    "TRUNCATE", "RENAME", "REPLACE", "PRIMARY", "FOREIGN", "KEY", "KEYS", "UNIQUE", "REFERENCES",
    "CASCADE", "CONSTRAINT", "DEFAULT", "CHECK", "AUTO_INCREMENT", "ZEROFILL", "UNSIGNED",
    "SIGNED", "CHAR", "CHARACTER", "VARCHAR", "BINARY", "VARBINARY", "TINYBLOB", "TINYTEXT",
    "TEXT", "BLOB", "MEDIUMTEXT", "MEDIUMBLOB", "LONGTEXT", "LONGBLOB", "ENUM", "BIT", "TINYINT",
    "BOOL", "BOOLEAN", "SMALLINT", "MEDIUMINT", "INT", "INTEGER", "BIGINT", "FLOAT", "DOUBLE",
    "DECIMAL", "DEC", "NUMERIC", "REAL", "DATE", "DATETIME", "TIMESTAMP", "TIME", "YEAR", "JSON",
    "ACCESSIBLE", "ADD", "ANALYZE", "ASENSITIVE", "BEFORE", "BOTH", "CALL", "CHANGE", "COLLATE",
    "COLUMN", "CONDITION", "CONTINUE", "CONVERT", "CURRENT_DATE", "CURRENT_TIME",
    "CURRENT_TIMESTAMP", "CURRENT_USER", "CURSOR", "DATABASES", "DAY_HOUR", "DAY_MICROSECOND",
    "DAY_MINUTE", "DAY_SECOND", "DECLARE", "DELAYED", "DESCRIBE", "DETERMINISTIC", "DIV",
    "DUAL", "EACH", "ELSEIF", "ENCLOSED", "ESCAPED", "EXIT", "EXPLAIN", "FALSE", "FETCH",
    "FLOAT4", "FLOAT8", "FOR", "FORCE", "FULLTEXT", "GENERATED", "GET", "GRANT",
    "HIGH_PRIORITY", "HOUR_MICROSECOND", "HOUR_MINUTE", "HOUR_SECOND", "IF", "IGNORE",
    "INFILE", "INOUT", "INSENSITIVE", "INT1", "INT2", "INT3", "INT4", "INT8", "INTERVAL",
    "IO_AFTER_GTIDS", "IO_BEFORE_GTIDS", "ITERATE", "KILL", "LEADING", "LEAVE", "LINEAR",
    "LINES", "LOAD", "LOCALTIME", "LOCALTIMESTAMP", "LOCK", "LONG", "LOOP", "LOW_PRIORITY",
    "MASTER_BIND", "MASTER_SSL_VERIFY_SERVER_CERT", "MATCH", "MAXVALUE", "MIDDLEINT",
    "MINUTE_MICROSECOND", "MINUTE_SECOND", "MOD", "MODIFIES", "NO_WRITE_TO_BINLOG",
    "OPTIMIZE", "OPTIMIZER_COSTS", "OPTION", "OPTIONALLY", "OUT", "OUTFILE", "PARTITION",
    "PRECISION", "PROCEDURE", "PURGE", "RANGE", "READ", "READS", "READ_WRITE", "REGEXP",
    "RELEASE", "REPEAT", "REQUIRE", "RESIGNAL", "RESTRICT", "RETURN", "REVOKE", "RLIKE",
    "SCHEMA", "SCHEMAS", "SECOND_MICROSECOND", "SENSITIVE", "SEPARATOR", "SHOW", "SIGNAL",
    "SPATIAL", "SPECIFIC", "SQL", "SQLEXCEPTION", "SQLSTATE", "SQLWARNING", "SQL_BIG_RESULT",
    "SQL_CALC_FOUND_ROWS", "SQL_SMALL_RESULT", "SSL", "STARTING", "STORED", "STRAIGHT_JOIN",
    "TERMINATED", "TO", "TRAILING", "TRIGGER", "TRUE", "UNDO", "UNLOCK", "USAGE", "UTC_DATE",
    "UTC_TIME", "UTC_TIMESTAMP", "VARCHARACTER", "VARYING", "VIRTUAL", "WHILE", "WITH",
    "WRITE", "XOR", "YEAR_MONTH",
];

/// True if `word` is a member of [`KEYWORDS`], ignoring ASCII case.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("select")]
    #[case("SELECT")]
    #[case("From")]
    #[case("in")]
    #[case("boolean")]
    #[case("auto_increment")]
    fn recognizes_known_keywords(#[case] word: &str) {
        assert!(is_keyword(word), "{word} should be recognized");
    }

    #[rstest]
    #[case("users")]
    #[case("FRM")]
    #[case("SELEC")]
    #[case("")]
    #[case("id")]
    fn rejects_unknown_words(#[case] word: &str) {
        assert!(!is_keyword(word), "{word} should NOT be recognized");
    }

    #[test]
    fn keywords_are_upper_cased_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for kw in KEYWORDS {
            assert_eq!(*kw, kw.to_ascii_uppercase());
            assert!(seen.insert(*kw), "{kw} listed twice");
        }
    }
}
