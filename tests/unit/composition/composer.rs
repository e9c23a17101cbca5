//! Tests for cell-by-cell mosaic composition

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use mosaictile::MosaicError;
    use mosaictile::composition::composer::MosaicComposer;
    use mosaictile::matching::index::ThumbnailIndex;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    fn solid_index(colors: &[Rgba<u8>]) -> ThumbnailIndex {
        let mut rng = StdRng::seed_from_u64(0);
        ThumbnailIndex::from_images(
            colors.iter().map(|&color| RgbaImage::from_pixel(5, 5, color)),
            &mut rng,
        )
    }

    // Tests a zero cell edge is rejected
    // Verified by removing the edge check in new()
    #[test]
    fn test_zero_edge_rejected() {
        assert!(matches!(
            MosaicComposer::new(0),
            Err(MosaicError::InvalidParameter { .. })
        ));
    }

    // Tests the red/blue scenario: a solid red source is rebuilt from the red tile only
    // Verified by picking the farthest tile in the matcher
    #[test]
    fn test_solid_red_scenario() {
        let source = RgbaImage::from_pixel(60, 60, RED);
        let index = solid_index(&[RED, BLUE]);
        let composer = MosaicComposer::new(30).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mosaic = composer.compose(&source, &index, &mut rng).unwrap();

        assert_eq!(mosaic.dimensions(), (60, 60));
        assert!(mosaic.pixels().all(|p| *p == RED));
    }

    // Tests each cell picks its own best tile
    // Verified by sampling the whole source for every cell
    #[test]
    fn test_cells_match_independently() {
        let source = RgbaImage::from_fn(60, 30, |x, _| if x < 30 { BLUE } else { GREEN });
        let index = solid_index(&[RED, GREEN, BLUE]);
        let composer = MosaicComposer::new(30).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mosaic = composer.compose(&source, &index, &mut rng).unwrap();

        assert_eq!(mosaic, source);
    }

    // Tests exact-multiple sources keep their dimensions and every pixel is written
    // Verified by allocating the canvas from the grid size instead of the source
    #[test]
    fn test_exact_multiple_fully_covered() {
        let source = RgbaImage::from_fn(40, 20, |x, y| Rgba([(x * 6) as u8, (y * 12) as u8, 90, 255]));
        let index = solid_index(&[GREEN]);
        let composer = MosaicComposer::new(10).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mosaic = composer.compose(&source, &index, &mut rng).unwrap();

        assert_eq!(mosaic.dimensions(), source.dimensions());
        assert!(mosaic.pixels().all(|p| *p == GREEN));
    }

    // Tests a single-entry index fills every cell with a resized copy of that thumbnail
    // Verified by skipping the resize step
    #[test]
    fn test_single_thumbnail_fills_every_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let thumbnail = RgbaImage::from_fn(2, 2, |x, y| if x == y { RED } else { BLUE });
        let index = ThumbnailIndex::from_images(vec![thumbnail], &mut rng);
        let source = RgbaImage::from_pixel(8, 8, GREEN);
        let composer = MosaicComposer::new(4).unwrap();

        let mosaic = composer.compose(&source, &index, &mut rng).unwrap();

        for (x, y, pixel) in mosaic.enumerate_pixels() {
            let (cx, cy) = ((x % 4) / 2, (y % 4) / 2);
            let expected = if cx == cy { RED } else { BLUE };
            assert_eq!(*pixel, expected, "pixel ({x}, {y})");
        }
    }

    // Tests partial edge cells are sampled within bounds and clipped to the canvas
    // Verified by sampling the nominal, unclipped cell rectangle
    #[test]
    fn test_partial_edge_cells_clipped() {
        let source = RgbaImage::from_fn(70, 50, |x, _| if x < 60 { RED } else { BLUE });
        let index = solid_index(&[RED, BLUE]);
        let composer = MosaicComposer::new(30).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mosaic = composer.compose(&source, &index, &mut rng).unwrap();

        assert_eq!(mosaic.dimensions(), (70, 50));
        assert_eq!(*mosaic.get_pixel(69, 49), BLUE);
        assert_eq!(*mosaic.get_pixel(59, 49), RED);
    }

    // Tests a cell edge far larger than the source composes without allocating whole tiles
    // Verified by resizing each thumbnail to the full edge before placing it
    #[test]
    fn test_huge_edge_on_small_source() {
        let mut rng = StdRng::seed_from_u64(5);
        let thumbnail = RgbaImage::from_fn(2, 2, |x, y| if x == 0 && y == 0 { GREEN } else { BLUE });
        let index = ThumbnailIndex::from_images(vec![thumbnail], &mut rng);
        let source = RgbaImage::from_pixel(10, 10, RED);
        let composer = MosaicComposer::new(u32::MAX).unwrap();

        let mosaic = composer.compose(&source, &index, &mut rng).unwrap();

        assert_eq!(mosaic.dimensions(), (10, 10));
        assert!(mosaic.pixels().all(|p| *p == GREEN));
    }

    // Tests an empty index fails before any cell is written
    // Verified by removing the up-front empty check
    #[test]
    fn test_empty_index_fails() {
        let source = RgbaImage::from_pixel(60, 60, RED);
        let index = ThumbnailIndex::default();
        let composer = MosaicComposer::new(30).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut cells_reported = 0;

        let result = composer.compose_with_progress(&source, &index, &mut rng, |_, _| {
            cells_reported += 1;
        });

        assert!(matches!(
            result,
            Err(MosaicError::InsufficientThumbnails { .. })
        ));
        assert_eq!(cells_reported, 0);
    }

    // Tests progress is reported once per cell in order
    // Verified by reporting before the cell is filled
    #[test]
    fn test_progress_reporting() {
        let source = RgbaImage::from_pixel(70, 50, RED);
        let index = solid_index(&[RED]);
        let composer = MosaicComposer::new(30).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut reports = Vec::new();

        composer
            .compose_with_progress(&source, &index, &mut rng, |done, total| {
                reports.push((done, total));
            })
            .unwrap();

        assert_eq!(reports, (1..=6).map(|done| (done, 6)).collect::<Vec<_>>());
    }

    // Tests the same seed produces the same mosaic
    // Verified by reseeding per cell from entropy
    #[test]
    fn test_deterministic_with_seed() {
        let source = RgbaImage::from_fn(45, 45, |x, y| Rgba([(x * 5) as u8, (y * 5) as u8, 128, 255]));
        let index = solid_index(&[RED, GREEN, BLUE, Rgba([128, 128, 128, 255])]);
        let composer = MosaicComposer::new(9).unwrap();

        let first = composer
            .compose(&source, &index, &mut StdRng::seed_from_u64(8))
            .unwrap();
        let second = composer
            .compose(&source, &index, &mut StdRng::seed_from_u64(8))
            .unwrap();

        assert_eq!(first, second);
    }
}
