crate::reexport!(datatype);
crate::reexport!(error);
crate::reexport!(fuzzy);
crate::reexport!(analyzer);
