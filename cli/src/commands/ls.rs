use vfind_common::config::Config;
use vfind_common::inventory::{Element, ObjectType};
use vfind_core::Finder;

use crate::terminal::print;

pub async fn ls(
    finder: &mut Finder,
    paths: &[String],
    types: &[ObjectType],
    cfg: &Config,
) -> anyhow::Result<()> {
    let paths: Vec<&str> = paths.iter().map(String::as_str).collect();
    let elements = keep_types(finder.managed_object_list(&paths).await?, types);

    if elements.is_empty() {
        print::no_results(cfg.quiet);
        return Ok(());
    }

    for element in &elements {
        print::object_line(&element.path, &element.object, cfg.quiet);
    }
    print::summary(elements.len(), cfg.quiet);
    Ok(())
}

/// Keeps elements whose wire type is in `types`. No types keeps everything.
fn keep_types(elements: Vec<Element>, types: &[ObjectType]) -> Vec<Element> {
    if types.is_empty() {
        return elements;
    }

    elements
        .into_iter()
        .filter(|element| types.contains(&element.object.kind))
        .collect()
}
