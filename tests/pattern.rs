mod tests {
    use scroll_pacer::{HEIGHT, PIXEL_COUNT, Pattern, WIDTH, lower_corner_markers};

    fn grid(pattern: &Pattern) -> [[u8; HEIGHT as usize]; WIDTH as usize] {
        let mut grid = [[0u8; HEIGHT as usize]; WIDTH as usize];
        for p in pattern.pixels() {
            grid[p.x as usize][p.y as usize] = p.max_brightness;
        }
        grid
    }

    #[test]
    fn test_oval_deterministic() {
        assert_eq!(Pattern::oval(40), Pattern::oval(40));
    }

    #[test]
    fn test_oval_covers_grid() {
        let oval = Pattern::oval(40);
        assert_eq!(oval.pixels().len(), PIXEL_COUNT);
        for (i, p) in oval.pixels().iter().enumerate() {
            // x-major grid order.
            assert_eq!(p.x as usize, i / HEIGHT as usize);
            assert_eq!(p.y as usize, i % HEIGHT as usize);
        }
    }

    #[test]
    fn test_oval_respects_brightness_ceiling() {
        for target in [20u8, 40, 70, 100, 130] {
            for p in Pattern::oval(target).pixels() {
                assert!(p.max_brightness <= target);
            }
        }
    }

    #[test]
    fn test_oval_peaks_at_lobe_center() {
        let grid = grid(&Pattern::oval(40));
        assert_eq!(grid[8][3], 40);
    }

    #[test]
    fn test_oval_symmetric_about_lobe_centers() {
        let grid = grid(&Pattern::oval(40));
        for x in 0..WIDTH as usize {
            for y in 0..HEIGHT as usize {
                assert_eq!(grid[x][y], grid[16 - x][y]);
                assert_eq!(grid[x][y], grid[x][6 - y]);
            }
        }
    }

    #[test]
    fn test_oval_quantization_gap() {
        // Near-invisible cells snap to 0 and the dimmest lit cells snap
        // up to 2, so a level of 1 never appears.
        for target in 20..=130u8 {
            for p in Pattern::oval(target).pixels() {
                assert_ne!(p.max_brightness, 1);
            }
        }
    }

    #[test]
    fn test_brighter_setting_widens_lobes() {
        let dim = Pattern::oval(20);
        let bright = Pattern::oval(100);
        let lit = |p: &Pattern| p.pixels().iter().filter(|p| p.max_brightness > 0).count();
        assert!(lit(&bright) > lit(&dim));
    }

    #[test]
    fn test_full_grid_uniform() {
        let flourish = Pattern::full_grid(50);
        assert_eq!(flourish.pixels().len(), PIXEL_COUNT);
        assert!(flourish.pixels().iter().all(|p| p.max_brightness == 50));
    }

    #[test]
    fn test_lower_corner_markers() {
        let [top, bottom] = lower_corner_markers(60);
        assert_eq!((top.x, top.y, top.max_brightness), (WIDTH - 1, 0, 60));
        assert_eq!(
            (bottom.x, bottom.y, bottom.max_brightness),
            (WIDTH - 1, HEIGHT - 1, 60)
        );
    }
}
