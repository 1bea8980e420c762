crate::reexport!(topics);
crate::reexport!(suggestion);
crate::reexport!(hover);
