//! MySQL 5.7 reference topics shown on hover.
use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicKind {
    #[display("keyword")]
    Keyword,
    #[display("function")]
    Function,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum Category {
    #[display("DDL/DML")]
    #[serde(rename = "DDL/DML")]
    DdlDml,
    #[display("DML")]
    #[serde(rename = "DML")]
    Dml,
    #[display("DDL")]
    #[serde(rename = "DDL")]
    Ddl,
    #[display("Utility")]
    Utility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub name: &'static str,
    pub kind: TopicKind,
    pub category: Category,
    pub description: &'static str,
    pub code_example: &'static str,
    pub reference: Reference,
}

/// Reference topic for `word`, ignoring ASCII case.
pub fn topic(word: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|t| t.name.eq_ignore_ascii_case(word))
}

pub static TOPICS: &[Topic] = &[
    Topic {
        name: "SELECT",
        kind: TopicKind::Keyword,
        category: Category::Dml,
        description: "Retrieves rows from one or more tables.",
        code_example: "SELECT foo FROM bar",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/select.html",
        },
    },
    Topic {
        name: "DELETE",
        kind: TopicKind::Keyword,
        category: Category::Dml,
        description: "Deletes rows from a table.",
        code_example: "DELETE FROM foo",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/delete.html",
        },
    },
    Topic {
        name: "CREATE",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Creates either a database or a table.",
        code_example: "CREATE TABLE foo (\n  bar INT\n)",
        reference: Reference {
            name: "W3 Reference",
            url: "https://www.w3schools.com/sql/sql_ref_create.asp",
        },
    },
    Topic {
        name: "ALTER",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Adds, deletes, or modifies columns in a table, or changes the data type of a column in a table.",
        code_example: "ALTER TABLE foo ADD bar INT",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/alter-table.html",
        },
    },
    Topic {
        name: "INSERT",
        kind: TopicKind::Keyword,
        category: Category::Dml,
        description: "Inserts new rows in a table.",
        code_example: "INSERT INTO foo (bar)\nVALUES (\"baz\")",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/insert.html",
        },
    },
    Topic {
        name: "UPDATE",
        kind: TopicKind::Keyword,
        category: Category::Dml,
        description: "Modifies existing rows in a table.",
        code_example: "UPDATE foo SET bar = \"baz\"",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/update.html",
        },
    },
    Topic {
        name: "TRUNCATE",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Deletes the data inside a table, but not the table itself.",
        code_example: "TRUNCATE TABLE foo",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/truncate-table.html",
        },
    },
    Topic {
        name: "INNER",
        kind: TopicKind::Keyword,
        category: Category::Dml,
        description: "Returns rows that have matching values in both tables.",
        code_example: "SELECT f.id, b.slug\nFROM foo f\nINNER JOIN bar b\nON b.foo_id = f.id",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/join.html",
        },
    },
    Topic {
        name: "WHERE",
        kind: TopicKind::Keyword,
        category: Category::Dml,
        description: "Filters a result to include only records that fulfill a specified condition.",
        code_example: "SELECT foo FROM bar\nWHERE foo = 1",
        reference: Reference {
            name: "W3 Reference",
            url: "https://www.w3schools.com/sql/sql_ref_where.asp",
        },
    },
    Topic {
        name: "FROM",
        kind: TopicKind::Keyword,
        category: Category::Dml,
        description: "Specifies which table to select or delete data from.",
        code_example: "SELECT foo FROM bar",
        reference: Reference {
            name: "W3 Reference",
            url: "https://www.w3schools.com/sql/sql_ref_from.asp",
        },
    },
    Topic {
        name: "VALUES",
        kind: TopicKind::Keyword,
        category: Category::Dml,
        description: "Specifies the values of an INSERT INTO statement.",
        code_example: "INSERT INTO foo (bar)\nVALUES (\"baz\")",
        reference: Reference {
            name: "W3 Reference",
            url: "https://www.w3schools.com/sql/sql_ref_values.asp",
        },
    },
    Topic {
        name: "INTO",
        kind: TopicKind::Keyword,
        category: Category::Dml,
        description: "Used in an INSERT INTO statement.",
        code_example: "INSERT INTO foo (bar)\nVALUES (\"baz\")",
        reference: Reference {
            name: "W3 Reference",
            url: "https://www.w3schools.com/sql/sql_ref_insert_into.asp",
        },
    },
    Topic {
        name: "JOIN",
        kind: TopicKind::Keyword,
        category: Category::Dml,
        description: "Joins tables. Can be INNER JOIN, LEFT JOIN, RIGHT JOIN, or FULL OUTER JOIN.",
        code_example: "SELECT f.id, b.slug\nFROM foo f\nINNER JOIN bar b\nON b.foo_id = f.id",
        reference: Reference {
            name: "W3 Reference",
            url: "https://www.w3schools.com/sql/sql_ref_join.asp",
        },
    },
    Topic {
        name: "IN",
        kind: TopicKind::Keyword,
        category: Category::Dml,
        description: "Used to specify multiple values in a WHERE clause.",
        code_example: "SELECT * FROM foo\nWHERE bar IN (1, 2, 3)",
        reference: Reference {
            name: "W3 Reference",
            url: "https://www.w3schools.com/sql/sql_ref_in.asp",
        },
    },
    Topic {
        name: "OR",
        kind: TopicKind::Keyword,
        category: Category::Dml,
        description: "Includes rows where either condition is true.",
        code_example: "SELECT * FROM foo\nWHERE bar = \"bar1\" OR bar = \"bar2\"",
        reference: Reference {
            name: "W3 Reference",
            url: "https://www.w3schools.com/sql/sql_ref_or.asp",
        },
    },
    Topic {
        name: "UNIQUE",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A constraint that ensures that all values in a column are unique.",
        code_example: "CREATE TABLE foo (\n  bar INT UNIQUE\n)",
        reference: Reference {
            name: "W3 Reference",
            url: "https://www.w3schools.com/sql/sql_ref_unique.asp",
        },
    },
    Topic {
        name: "INDEX",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Indexes are used to retrieve data from the database very fast.",
        code_example: "CREATE INDEX foo ON bar (baz)",
        reference: Reference {
            name: "W3 Reference",
            url: "https://www.w3schools.com/sql/sql_ref_index.asp",
        },
    },
    Topic {
        name: "LIMIT",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Specifies the number of records to return in the result set.",
        code_example: "SELECT * FROM foo LIMIT 5",
        reference: Reference {
            name: "W3 Reference",
            url: "https://www.w3schools.com/sql/sql_ref_top.asp",
        },
    },
    Topic {
        name: "CHAR",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A fixed length string of optional size between 0 and 255. Default is 1.",
        code_example: "CREATE TABLE foo (\n  bar CHAR(10)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/char.html",
        },
    },
    Topic {
        name: "VARCHAR",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A variable length string. Size parameter specifies maximum length between 0 and 65,535.",
        code_example: "CREATE TABLE foo (\n  bar VARCHAR(50)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/char.html",
        },
    },
    Topic {
        name: "BINARY",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Stores fixed length binary byte strings. Size specifies column length in bytes. Default is 1.",
        code_example: "CREATE TABLE foo (\n  bar BINARY(10)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/binary-varbinary.html",
        },
    },
    Topic {
        name: "VARBINARY",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Stores variable length binary byte strings. Size specifies maximum column length in bytes.",
        code_example: "CREATE TABLE foo (\n  bar VARBINARY(10)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/binary-varbinary.html",
        },
    },
    Topic {
        name: "TINYBLOB",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A tiny BLOB (Binary Large Objects). Max length of 255 bytes.",
        code_example: "CREATE TABLE foo (\n  bar TINYBLOB\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/blob.html",
        },
    },
    Topic {
        name: "TINYTEXT",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Holds a string with a maximum length of 255 characters.",
        code_example: "CREATE TABLE foo (\n  bar TINYTEXT\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/blob.html",
        },
    },
    Topic {
        name: "TEXT",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Holds a string with a maximum length of 65,535 bytes.",
        code_example: "CREATE TABLE foo (\n  bar TEXT(10)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/blob.html",
        },
    },
    Topic {
        name: "BLOB",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A BLOB (Binary Large Object). Max length of 65,535 bytes.",
        code_example: "CREATE TABLE foo (\n  bar BLOB(10)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/blob.html",
        },
    },
    Topic {
        name: "MEDIUMTEXT",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Holds a string with a maximum length of 16,777,215 characters.",
        code_example: "CREATE TABLE foo (\n  bar MEDIUMTEXT\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/blob.html",
        },
    },
    Topic {
        name: "MEDIUMBLOB",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A BLOB (Binary Large Object). Max length of 16,777,215 bytes.",
        code_example: "CREATE TABLE foo (\n  bar MEDIUMBLOB\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/blob.html",
        },
    },
    Topic {
        name: "LONGTEXT",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Holds a string with a maximum length of 4,294,967,295 characters.",
        code_example: "CREATE TABLE foo (\n  bar LONGTEXT\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/blob.html",
        },
    },
    Topic {
        name: "LONGBLOB",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A BLOB (Binary Large Object). Max length of 4,294,967,295 bytes.",
        code_example: "CREATE TABLE foo (\n  bar LONGBLOB\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/blob.html",
        },
    },
    Topic {
        name: "ENUM",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A string object that can only have one value, chosen from a list of possible values.",
        code_example: "CREATE TABLE foo (\n  bar ENUM(\"1\", \"2\", \"3\")\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/enum.html",
        },
    },
    Topic {
        name: "SET",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A string object that can have 0 or more values, chosen from a list of possible values.",
        code_example: "CREATE TABLE foo (\n  bar SET(\"1\", \"2\", \"3\")\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/set.html",
        },
    },
    Topic {
        name: "BIT",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A bit-value type. The number of bits per value is specified in size.",
        code_example: "CREATE TABLE foo (\n  bar BIT(1)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/bit-type.html",
        },
    },
    Topic {
        name: "TINYINT",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A very small integer. Signed range is from -128 to 127. Unsigned range is from 0 to 255.",
        code_example: "CREATE TABLE foo (\n  bar TINYINT(1)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/numeric-type-syntax.html",
        },
    },
    Topic {
        name: "BOOL",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Zero is considered as false, nonzero values are considered as true.",
        code_example: "CREATE TABLE foo (\n  bar BOOL\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/numeric-type-syntax.html",
        },
    },
    Topic {
        name: "BOOLEAN",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Zero is considered as false, nonzero values are considered as true.",
        code_example: "CREATE TABLE foo (\n  bar BOOLEAN\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/numeric-type-syntax.html",
        },
    },
    Topic {
        name: "SMALLINT",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A small integer. Signed range is from -32768 to 32767. Unsigned range is from 0 to 65535.",
        code_example: "CREATE TABLE foo (\n  bar SMALLINT(1)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/numeric-type-syntax.html",
        },
    },
    Topic {
        name: "MEDIUMINT",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A medium integer. Signed range is from -8388608 to 8388607. Unsigned range is from 0 to 16777215.",
        code_example: "CREATE TABLE foo (\n  bar MEDIUMINT(1)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/numeric-type-syntax.html",
        },
    },
    Topic {
        name: "INT",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "An integer. Signed range is from -2147483648 to 2147483647. Unsigned range is from 0 to 4294967295.",
        code_example: "CREATE TABLE foo (\n  bar INT(1)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/numeric-type-syntax.html",
        },
    },
    Topic {
        name: "INTEGER",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "An integer. Signed range is from -2147483648 to 2147483647. Unsigned range is from 0 to 4294967295.",
        code_example: "CREATE TABLE foo (\n  bar INTEGER(1)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/numeric-type-syntax.html",
        },
    },
    Topic {
        name: "BIGINT",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A large integer. Signed range is from -9223372036854775808 to 9223372036854775807. Unsigned range is from 0 to 18446744073709551615.",
        code_example: "CREATE TABLE foo (\n  bar BIGINT(1)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/numeric-type-syntax.html",
        },
    },
    Topic {
        name: "FLOAT",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A floating point number. The total number of digits is specified in size.",
        code_example: "CREATE TABLE foo (\n  bar FLOAT(1)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/floating-point-types.html",
        },
    },
    Topic {
        name: "DOUBLE",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A normal-size floating point number. The total number of digits is specified in size.",
        code_example: "CREATE TABLE foo (\n  bar FLOAT(1)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/floating-point-types.html",
        },
    },
    Topic {
        name: "DECIMAL",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "An exact fixed-point number. The total number of digits is specified in size.",
        code_example: "CREATE TABLE foo (\n  bar DECIMAL(1)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/fixed-point-types.html",
        },
    },
    Topic {
        name: "DEC",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "An exact fixed-point number. The total number of digits is specified in size.",
        code_example: "CREATE TABLE foo (\n  bar DEC(1)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/fixed-point-types.html",
        },
    },
    Topic {
        name: "DATE",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A date. Format: YYYY-MM-DD. The supported range is from \"1000-01-01\" to \"9999-12-31\".",
        code_example: "CREATE TABLE foo (\n  bar DATE\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/datetime.html",
        },
    },
    Topic {
        name: "DATETIME",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A date and time combination. Format: YYYY-MM-DD hh:mm:ss. The supported range is from \"1000-01-01 00:00:00\" to \"9999-12-31 23:59:59\".",
        code_example: "CREATE TABLE foo (\n  bar DATETIME\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/datetime.html",
        },
    },
    Topic {
        name: "TIMESTAMP",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A timestamp. TIMESTAMP values are stored as the number of seconds since the Unix epoch (\"1970-01-01 00:00:00\" UTC).",
        code_example: "CREATE TABLE foo (\n  bar TIMESTAMP\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/datetime.html",
        },
    },
    Topic {
        name: "TIME",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A time. Format: hh:mm:ss. The supported range is from \"-838:59:59\" to \"838:59:59\"",
        code_example: "CREATE TABLE foo (\n  bar TIME\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/time.html",
        },
    },
    Topic {
        name: "YEAR",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "A year in four-digit format. Values allowed in four-digit format: 1901 to 2155, and 0000.",
        code_example: "CREATE TABLE foo (\n  bar YEAR\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/year.html",
        },
    },
    Topic {
        name: "JSON",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Stores JSON documents. Do NOT use this type if you can avoid it.",
        code_example: "CREATE TABLE foo (\n  bar JSON\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/json.html",
        },
    },
    Topic {
        name: "AUTO_INCREMENT",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Generates a unique identity for new rows.",
        code_example: "CREATE TABLE foo (\n  bar INT AUTO_INCREMENT\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/example-auto-increment.html",
        },
    },
    Topic {
        name: "ZEROFILL",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Pads the displayed value of the field with zeros up to the display width.",
        code_example: "CREATE TABLE foo (\n  bar INT(4) ZEROFILL\n)",
        reference: Reference {
            name: "StackOverflow Reference",
            url: "https://stackoverflow.com/questions/5256469/what-is-the-benefit-of-zerofill-in-mysql",
        },
    },
    Topic {
        name: "REFERENCES",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Used to define a foreign key constraint on a column.",
        code_example: "CREATE TABLE foo (\n  bar INT,\n  FOREIGN KEY (bar) REFERENCES baz(id)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/create-table-foreign-keys.html",
        },
    },
    Topic {
        name: "PRIMARY",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Used as a key constraint to uniquely identify each record in a table.",
        code_example: "CREATE TABLE foo (\n  bar INT,\n  PRIMARY KEY (bar)\n)",
        reference: Reference {
            name: "W3 Reference",
            url: "https://www.w3schools.com/sql/sql_primarykey.asp",
        },
    },
    Topic {
        name: "NOT",
        kind: TopicKind::Keyword,
        category: Category::DdlDml,
        description: "Logical NOT operator. Used in expressions and in table definitions.",
        code_example: "CREATE TABLE foo (\n  bar INT NOT NULL\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/logical-operators.html#operator_not",
        },
    },
    Topic {
        name: "NULL",
        kind: TopicKind::Keyword,
        category: Category::DdlDml,
        description: "Means \"no data\". Used in expressions and in table definitions.",
        code_example: "CREATE TABLE foo (\n  bar INT NOT NULL\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/null-values.html",
        },
    },
    Topic {
        name: "KEY",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Analogous to `INDEX`. Used to find rows quickly.",
        code_example: "CREATE TABLE foo (\n  bar INT, PRIMARY KEY (bar)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/create-table.html",
        },
    },
    Topic {
        name: "CASCADE",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Used to indicate that MySQL should delete or update referenced records.",
        code_example: "CREATE TABLE foo (\n  bar INT,\n  FOREIGN KEY (bar) REFERENCES baz (id) ON DELETE CASCADE\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/create-table-foreign-keys.html",
        },
    },
    Topic {
        name: "FOREIGN",
        kind: TopicKind::Keyword,
        category: Category::Ddl,
        description: "Used to define a foreign key constraint on a column.",
        code_example: "CREATE TABLE foo (\n  bar INT,\n  FOREIGN KEY (bar) REFERENCES baz(id)\n)",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/create-table-foreign-keys.html",
        },
    },
    Topic {
        name: "ON",
        kind: TopicKind::Keyword,
        category: Category::DdlDml,
        description: "Typically used to join tables where the column names do not match in both tables.",
        code_example: "SELECT * FROM foo.bar\nJOIN foo.baz ON (bar.baz_id = baz.id)",
        reference: Reference {
            name: "StackOverflow Reference",
            url: "https://stackoverflow.com/questions/11366006/mysql-on-vs-using?noredirect=1&lq=1",
        },
    },
    Topic {
        name: "TABLE",
        kind: TopicKind::Keyword,
        category: Category::DdlDml,
        description: "Represents a collection of related data held in a table format. Consists of columns and rows.",
        code_example: "CREATE TABLE foo (\n  bar INT\n)",
        reference: Reference {
            name: "Wikipedia Reference",
            url: "https://en.wikipedia.org/wiki/Table_(database)",
        },
    },
    Topic {
        name: "DATABASE",
        kind: TopicKind::Keyword,
        category: Category::DdlDml,
        description: "Represents an organized collection of data, often stored in individual tables.",
        code_example: "CREATE DATABASE foo",
        reference: Reference {
            name: "Wikipedia Reference",
            url: "https://en.wikipedia.org/wiki/Database",
        },
    },
    Topic {
        name: "USE",
        kind: TopicKind::Keyword,
        category: Category::Utility,
        description: "Tells MySQL to use the named database as the default (current) database for subsequent statements.",
        code_example: "USE foo",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/use.html",
        },
    },
    Topic {
        name: "AS",
        kind: TopicKind::Keyword,
        category: Category::Dml,
        description: "Defines an alias for a table name or column name.",
        code_example: "SELECT foo AS bar FROM baz",
        reference: Reference {
            name: "W3 Reference",
            url: "https://www.w3schools.com/sql/sql_alias.asp",
        },
    },
    Topic {
        name: "AND",
        kind: TopicKind::Keyword,
        category: Category::Dml,
        description: "Used in a WHERE clause to only include rows where both conditions are true.",
        code_example: "SELECT * FROM foo\nWHERE bar = \"bar\"\nAND baz = \"baz\"",
        reference: Reference {
            name: "W3 Reference",
            url: "https://www.w3schools.com/sql/sql_ref_and.asp",
        },
    },
    Topic {
        name: "JSON_CONTAINS",
        kind: TopicKind::Function,
        category: Category::Dml,
        description: "A function used to check if a given JSON document contains a given value.",
        code_example: "SELECT * FROM foo\nWHERE JSON_CONTAINS(id, JSON_ARRAY(\"some-id\"))",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/json-search-functions.html",
        },
    },
    Topic {
        name: "JSON_ARRAY",
        kind: TopicKind::Function,
        category: Category::Dml,
        description: "A function used to create a JSON array.",
        code_example: "SELECT * FROM foo\nWHERE JSON_CONTAINS(id, JSON_ARRAY(\"some-id\"))",
        reference: Reference {
            name: "MySQL Reference",
            url: "https://dev.mysql.com/doc/refman/5.7/en/json-creation-functions.html#function_json-array",
        },
    },
];
