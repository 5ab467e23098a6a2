//! CLI command implementations.

use broadside_contact::{CollisionGroup, CollisionResult};
use broadside_index::Quadtree;
use broadside_types::BroadsideResult;

use crate::scene::{Scene, SceneCollider};
use crate::Method;

/// Classify one named collider against the rest of the scene.
pub fn query(path: &str, name: &str, method: Method, offset: f32) -> BroadsideResult<()> {
    let scene = Scene::load(path)?;
    scene.validate()?;
    let target = scene.find(name)?;

    let mut index = Quadtree::new(scene.region, scene.config)?;
    for collider in &scene.colliders {
        index.insert(collider);
    }

    let group = CollisionGroup::from_index(&index, target);
    let result: CollisionResult<SceneCollider> = match method {
        Method::Bounds => group.check_by_bounds(offset),
        Method::Points => group.check_by_points(offset),
    };

    println!("Target: {} {:?}", target.name, target.bounds);
    println!("Method: {method:?}, offset {offset}");
    println!("Candidates: {}", group.candidates().len());
    println!();

    for (label, bucket) in [
        ("Top", result.top()),
        ("Bottom", result.bottom()),
        ("Left", result.left()),
        ("Right", result.right()),
    ] {
        let names: Vec<&str> = bucket.iter().map(|c| c.name.as_str()).collect();
        println!("  {label:<7} {}", if names.is_empty() { "-".to_string() } else { names.join(", ") });
    }
    Ok(())
}

/// Build the scene's index and print occupancy statistics.
pub fn stats(path: &str) -> BroadsideResult<()> {
    let scene = Scene::load(path)?;
    scene.validate()?;

    let mut index = Quadtree::new(scene.region, scene.config)?;
    for collider in &scene.colliders {
        index.insert(collider);
    }

    println!("Broadside Index Stats");
    println!("─────────────────────");
    println!("Region:       {:?}", index.region());
    println!("Colliders:    {}", scene.colliders.len());
    println!("Stored refs:  {} (straddlers count once per quadrant)", index.len());
    println!("Nodes:        {}", index.node_count());
    println!("Max depth:    {}", index.depth());
    Ok(())
}

/// Validate a scene file and report what it contains.
pub fn validate(path: &str) -> BroadsideResult<()> {
    let scene = Scene::load(path)?;
    scene.validate()?;
    println!(
        "OK: {} colliders in region {:?} (max_objects={}, max_levels={})",
        scene.colliders.len(),
        scene.region,
        scene.config.max_objects,
        scene.config.max_levels
    );
    Ok(())
}
