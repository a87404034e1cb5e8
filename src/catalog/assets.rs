use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::task::JoinSet;
use uuid::Uuid;

use crate::catalog::component::Component;
use crate::config::ASSET_SUBDIR;

/// Copy every referenced image into `<build_dir>/generated/img/` under a
/// freshly generated unique name and rewrite each record's `img` to the new
/// build-relative path.
///
/// All copies run concurrently; this function returns only once the whole
/// set has settled. The first failed copy fails the aggregate (dropping the
/// set cancels the stragglers), so rendering never proceeds with dangling
/// image references. Components without an image are untouched. Files
/// copied before a failure are left in place.
pub async fn relocate_assets(components: &mut [Component], build_dir: &Path) -> Result<()> {
    let mut copies = JoinSet::new();

    for (index, component) in components.iter().enumerate() {
        let Some(source) = component.img.clone() else {
            continue;
        };
        let relative = PathBuf::from(ASSET_SUBDIR).join(format!("{}.png", Uuid::new_v4()));
        let target = build_dir.join(&relative);

        copies.spawn(async move {
            tokio::fs::copy(&source, &target).await.with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    source.display(),
                    target.display()
                )
            })?;
            Ok::<_, anyhow::Error>((index, relative))
        });
    }

    while let Some(joined) = copies.join_next().await {
        let (index, relative) = joined??;
        components[index].img = Some(relative);
    }

    Ok(())
}
