//! Compositing pipeline driver: ties together scene, storage, and grid
//! operations.
//!
//! The run is a single synchronous pass. For each model the source grid is
//! loaded once; for each of its transforms the grid is resampled and the
//! result folded into the output by summation. The first failure aborts
//! the whole run; there is no partial output and no skip-and-continue.

use anyhow::{Context, Result};

use cairn_grid::composite::accumulate;
use cairn_grid::grid::VoxelGrid;
use cairn_grid::resample::resample;
use cairn_grid::transform::HomogeneousTransform;
use cairn_scene::ModelEntry;
use cairn_store::StorageResolver;

/// Composite every model in the scene into a single output grid.
pub fn compose_scene(models: &[ModelEntry], resolver: &StorageResolver) -> Result<VoxelGrid> {
    let mut output = VoxelGrid::new();

    for (index, model) in models.iter().enumerate() {
        println!(
            "Model {}: '{}' ({} transforms)",
            index,
            model.name,
            model.transforms.len()
        );
        log::debug!(
            "resolving '{}' to {}",
            model.name,
            resolver.resolve(&model.name).display()
        );

        let source = resolver
            .load_source(&model.name)
            .with_context(|| format!("loading grid for model {} ('{}')", index, model.name))?;

        for (step, spec) in model.transforms.iter().enumerate() {
            let transform = HomogeneousTransform::from_parts(spec.rotation, spec.translation);
            let contribution = resample(&source, &transform).with_context(|| {
                format!("resampling model {} ('{}'), transform {}", index, model.name, step)
            })?;
            println!(
                "  transform {}: {} active voxels",
                step,
                contribution.active_count()
            );
            accumulate(&mut output, contribution);
        }
    }

    Ok(output)
}
