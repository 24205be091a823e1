//! Key path resolution with randomized descent

use crate::domain::node::{TagMap, TagNode};
use crate::error::ResolutionError;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Resolve `path` against `base` to a single string.
///
/// The first key is looked up in `base`, each further key descends one
/// mapping level. Whatever node is reached is then reduced to a string by
/// [`resolve_node`].
pub fn resolve<S, R>(base: &TagMap, path: &[S], rng: &mut R) -> Result<String, ResolutionError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let node = lookup(base, path)?;
    resolve_node(node, rng)
}

/// Reduce a node to a string: scalars as-is, one random list entry, or
/// [`pick_from_map`] for mappings.
pub fn resolve_node<R>(node: &TagNode, rng: &mut R) -> Result<String, ResolutionError>
where
    R: Rng + ?Sized,
{
    match node {
        TagNode::Scalar(value) => Ok(value.clone()),
        TagNode::List(items) => items
            .choose(rng)
            .cloned()
            .ok_or(ResolutionError::EmptyCollection),
        TagNode::Map(map) => pick_from_map(map, rng),
    }
}

/// Pick a value out of a mapping.
///
/// One key is drawn at random. If its value is itself a mapping, one key of
/// that inner mapping is drawn too and resolved inside it; otherwise the
/// drawn key is resolved inside the outer mapping.
pub fn pick_from_map<R>(map: &TagMap, rng: &mut R) -> Result<String, ResolutionError>
where
    R: Rng + ?Sized,
{
    let (key, value) = random_entry(map, rng)?;

    match value {
        TagNode::Map(inner) => {
            let (inner_key, _) = random_entry(inner, rng)?;
            resolve(inner, &[inner_key.as_str()], &mut *rng)
        }
        _ => resolve(map, &[key.as_str()], &mut *rng),
    }
}

fn random_entry<'a, R>(
    map: &'a TagMap,
    rng: &mut R,
) -> Result<(&'a String, &'a TagNode), ResolutionError>
where
    R: Rng + ?Sized,
{
    if map.is_empty() {
        return Err(ResolutionError::EmptyCollection);
    }
    let index = rng.random_range(0..map.len());
    map.iter().nth(index).ok_or(ResolutionError::EmptyCollection)
}

/// Walk `path` from `base` without resolving the node it reaches
pub fn lookup<'a, S>(base: &'a TagMap, path: &[S]) -> Result<&'a TagNode, ResolutionError>
where
    S: AsRef<str>,
{
    let Some((first, rest)) = path.split_first() else {
        return Err(ResolutionError::KeyNotFound { key: String::new() });
    };

    let mut current_key = first.as_ref();
    let mut node = base
        .get(current_key)
        .ok_or_else(|| ResolutionError::KeyNotFound {
            key: current_key.to_string(),
        })?;

    for key in rest {
        let key = key.as_ref();
        let TagNode::Map(children) = node else {
            return Err(ResolutionError::ShapeMismatch {
                key: current_key.to_string(),
            });
        };
        node = children
            .get(key)
            .ok_or_else(|| ResolutionError::KeyNotFound {
                key: key.to_string(),
            })?;
        current_key = key;
    }

    Ok(node)
}
