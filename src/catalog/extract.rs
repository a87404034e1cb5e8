use std::path::{Path, PathBuf};

use crate::catalog::component::Component;
use crate::parsers::comment::{Block, Tag};

/// The closed set of tags the extractor understands. Everything else in a
/// block is ignored, which keeps old catalogs working when authors adopt
/// new annotations.
enum KnownTag {
    Component,
    Link,
    Image,
}

impl KnownTag {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "lsComponent" => Some(Self::Component),
            "lsLink" => Some(Self::Link),
            "lsImg" => Some(Self::Image),
            _ => None,
        }
    }
}

/// Interpret the first documentation block of a declaration.
///
/// Returns `None` when the block carries no `@lsComponent` tag or when no
/// name can be resolved; both are normal "not a catalog entry" outcomes.
///
/// - `name`: the tag's inline value, falling back to `decl_ident`.
/// - `img`: the `@lsImg` value (or `./<name>.png` when the tag is bare),
///   anchored at `source_dir` because component sources and their image
///   assets live side by side.
/// - `description` / `link`: taken verbatim from their tags.
///
/// When a recognized tag is repeated, the last occurrence wins.
pub fn extract_component(
    block: &Block,
    decl_ident: Option<&str>,
    source_dir: &Path,
) -> Option<Component> {
    let mut component_tag: Option<&Tag> = None;
    let mut link_tag: Option<&Tag> = None;
    let mut image_tag: Option<&Tag> = None;

    for tag in &block.tags {
        match KnownTag::from_name(&tag.tag) {
            Some(KnownTag::Component) => component_tag = Some(tag),
            Some(KnownTag::Link) => link_tag = Some(tag),
            Some(KnownTag::Image) => image_tag = Some(tag),
            None => {}
        }
    }

    let component_tag = component_tag?;
    let name = component_tag
        .name
        .clone()
        .or_else(|| decl_ident.map(str::to_string))?;

    let img = image_tag.map(|tag| {
        let raw = tag
            .name
            .clone()
            .unwrap_or_else(|| format!("./{}.png", name));
        normalize(source_dir.join(raw))
    });

    Some(Component {
        description: component_tag.description.clone(),
        link: link_tag.and_then(|tag| tag.name.clone()),
        img,
        name,
    })
}

/// Lexically drop `.` components introduced by joining `./`-relative tag
/// values onto the source directory.
fn normalize(path: PathBuf) -> PathBuf {
    path.components().collect()
}
