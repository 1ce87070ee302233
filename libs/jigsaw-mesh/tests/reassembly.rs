use approx::assert_relative_eq;
use jigsaw_mesh::{ImageSize, JigsawConfig, JigsawGenerator, Vec3};

fn assembled_bounds(h: u32, v: u32, image: Option<ImageSize>) -> (Vec3, Vec3) {
    let mut config = JigsawConfig::new(h, v, 0.2).unwrap().with_seed(31);
    config.image = image;
    let puzzle = JigsawGenerator::new(config).unwrap().generate().unwrap();
    assert!(puzzle.is_complete());

    let mut min = Vec3::splat(f64::INFINITY);
    let mut max = Vec3::splat(f64::NEG_INFINITY);
    for piece in &puzzle.pieces {
        for p in piece.assembled_positions() {
            min = min.min(p);
            max = max.max(p);
        }
    }
    (min, max)
}

#[test]
fn unit_square_reassembles_centred() {
    let (min, max) = assembled_bounds(2, 2, None);
    assert_relative_eq!(min.x, -0.5, epsilon = 1e-9);
    assert_relative_eq!(min.y, -0.5, epsilon = 1e-9);
    assert_relative_eq!(max.x, 0.5, epsilon = 1e-9);
    assert_relative_eq!(max.y, 0.5, epsilon = 1e-9);
    assert_relative_eq!(min.z, 0.0);
    assert_relative_eq!(max.z, 0.2);
}

#[test]
fn image_reassembles_centred() {
    let (min, max) = assembled_bounds(4, 3, Some(ImageSize::new(1024.0, 768.0)));
    assert_relative_eq!(min.x, -512.0, epsilon = 1e-6);
    assert_relative_eq!(min.y, -384.0, epsilon = 1e-6);
    assert_relative_eq!(max.x, 512.0, epsilon = 1e-6);
    assert_relative_eq!(max.y, 384.0, epsilon = 1e-6);
}

#[test]
fn uvs_stay_in_unit_square() {
    let config = JigsawConfig::new(3, 3, 0.1)
        .unwrap()
        .with_seed(5)
        .with_image(ImageSize::new(300.0, 300.0));
    let puzzle = JigsawGenerator::new(config).unwrap().generate().unwrap();
    for piece in &puzzle.pieces {
        for (uv, p) in piece.mesh.uvs.iter().zip(piece.assembled_positions()) {
            assert!((0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y));
            // UV is the normalized position of the reassembled vertex
            assert_relative_eq!(uv.x * 300.0 - 150.0, p.x, epsilon = 1e-9);
            assert_relative_eq!(uv.y * 300.0 - 150.0, p.y, epsilon = 1e-9);
        }
    }
}
