//! Entry points: look equipment up by id and project it through the registry.

use gridscope_core::{ElementType, GridscopeError, GridscopeResult, InfoType};
use rayon::prelude::*;
use tracing::debug;

use crate::context::MapperContext;
use crate::element_infos::ElementInfos;
use crate::registry::ViewRegistry;

/// Project the equipment `id` into the `info_type` view of `element_type`.
///
/// Fails with [`GridscopeError::NotFound`] for an unknown id,
/// [`GridscopeError::TypeMismatch`] when the id belongs to another element
/// type and [`GridscopeError::UnsupportedView`] for a pair the registry does
/// not list.
pub fn project<'a>(
    ctx: &MapperContext<'a>,
    element_type: ElementType,
    info_type: InfoType,
    id: &str,
) -> GridscopeResult<ElementInfos> {
    let identifiable = ctx
        .network
        .identifiable(id)
        .ok_or_else(|| GridscopeError::NotFound(id.to_string()))?;
    if identifiable.element_type() != element_type {
        return Err(GridscopeError::TypeMismatch {
            id: id.to_string(),
            expected: element_type,
            found: identifiable.element_type(),
        });
    }
    let mapper = ViewRegistry::global().resolve(element_type, info_type)?;
    mapper(ctx, identifiable)
}

/// Project several ids in parallel, keeping their order.
///
/// An empty `ids` projects every element of `element_type` in network order.
/// The first failure aborts the whole batch.
pub fn project_many<'a>(
    ctx: &MapperContext<'a>,
    element_type: ElementType,
    info_type: InfoType,
    ids: &[String],
) -> GridscopeResult<Vec<ElementInfos>> {
    let mapper = ViewRegistry::global().resolve(element_type, info_type)?;

    let projected: Vec<ElementInfos> = if ids.is_empty() {
        let elements = ctx.network.elements(element_type);
        elements
            .par_iter()
            .map(|identifiable| mapper(ctx, *identifiable))
            .collect::<GridscopeResult<_>>()?
    } else {
        ids.par_iter()
            .map(|id| project(ctx, element_type, info_type, id))
            .collect::<GridscopeResult<_>>()?
    };

    debug!(
        %element_type,
        %info_type,
        count = projected.len(),
        "projected views"
    );
    Ok(projected)
}
