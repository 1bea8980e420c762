crate::reexport!(column);
crate::reexport!(table);
crate::reexport!(schema);
crate::reexport!(provider);
crate::reexport!(store);

use crate::{TsType, sql_type_to_ts_type};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
