use crate::ports::{Catalog, WorkflowResult};

/// Every guessable primary name, ordered by rank.
pub fn autocomplete<C>(catalog: &C) -> impl Fn() -> WorkflowResult<Vec<String>> + '_
where
    C: Catalog,
{
    move || Ok(catalog.names()?)
}
