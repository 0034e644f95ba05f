use ecomap::layout::{
    LayoutConfig, LayoutRegion, Rect, Weighting, compute_layout, layout_visible, resolve_icon_grid,
};
use ecomap::model::{Category, Project};
use ecomap::visibility::VisibleSet;

fn category(title: &str, priority: bool, count: usize) -> Category {
    let mut c = Category::new(title, priority);
    for i in 0..count {
        c.push_unique(Project {
            name: format!("{} {}", title, i),
            image: String::new(),
            tagline: String::new(),
        });
    }
    c
}

fn assert_tiles(regions: &[LayoutRegion], cfg: &LayoutConfig) {
    let bounds = cfg.available_area();
    for (i, a) in regions.iter().enumerate() {
        assert!(bounds.contains(&a.rect), "{} outside {:?}", a.key, bounds);
        for b in &regions[i + 1..] {
            assert!(!a.rect.overlaps(&b.rect), "{} overlaps {}", a.key, b.key);
        }
    }
}

fn assert_grid_bounds(regions: &[LayoutRegion], cfg: &LayoutConfig) {
    for r in regions {
        assert!(r.grid.icon_size >= cfg.min_icon_size, "{}", r.key);
        assert!(r.grid.icon_size <= cfg.max_icon_size, "{}", r.key);
        for cell in r.icon_cells() {
            assert!(r.content.contains(&cell), "{}: {:?} not in {:?}", r.key, cell, r.content);
        }
    }
}

#[test]
fn example_ordering_and_areas() {
    let ai = category("AI", true, 20);
    let nft = category("NFT", true, 3);
    let other = category("Other", false, 50);
    let cats = vec![("ai", &ai), ("nft", &nft), ("other", &other)];
    let cfg = LayoutConfig::default();
    let regions = compute_layout(&cats, &cfg);

    let keys: Vec<&str> = regions.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["ai", "nft", "other"]);
    assert!(regions[2].rect.area() >= regions[1].rect.area());
    assert_tiles(&regions, &cfg);
    assert_grid_bounds(&regions, &cfg);
}

#[test]
fn empty_visible_set_gives_no_regions() {
    assert!(compute_layout(&[], &LayoutConfig::default()).is_empty());
}

#[test]
fn zero_canvas_gives_no_regions() {
    let c = category("AI", true, 4);
    let cfg = LayoutConfig {
        canvas_width: 40.0,
        canvas_height: 0.0,
        ..Default::default()
    };
    assert!(compute_layout(&[("ai", &c)], &cfg).is_empty());
}

#[test]
fn single_category_fills_the_padded_canvas() {
    let c = category("AI", true, 10);
    let cfg = LayoutConfig::default();
    let regions = compute_layout(&[("ai", &c)], &cfg);
    assert_eq!(regions.len(), 1);
    let half = cfg.inner_padding / 2.0;
    assert_eq!(regions[0].rect, cfg.available_area().inset(half));
    assert_eq!(regions[0].overflow, 0);
    assert_eq!(regions[0].projects.len(), 10);
}

#[test]
fn many_categories_tile_without_overlap() {
    let cats: Vec<Category> = (0..23)
        .map(|i| category(&format!("Cat {:02}", i), i % 3 == 0, (i * 7) % 40 + 1))
        .collect();
    let keys: Vec<String> = (0..23).map(|i| format!("cat-{}", i)).collect();
    let pairs: Vec<(&str, &Category)> = keys.iter().map(|k| k.as_str()).zip(cats.iter()).collect();

    for weighting in [Weighting::Linear, Weighting::SquareRoot] {
        let cfg = LayoutConfig {
            weighting,
            ..Default::default()
        };
        let regions = compute_layout(&pairs, &cfg);
        assert_eq!(regions.len(), pairs.len());
        assert_tiles(&regions, &cfg);
        assert_grid_bounds(&regions, &cfg);
        for (region, (_, c)) in regions.iter().zip(&pairs) {
            assert_eq!(region.projects.len() + region.overflow, c.projects.len());
        }
    }
}

#[test]
fn max_area_fraction_caps_a_dominant_category() {
    let big = category("Big", false, 400);
    let a = category("A", false, 2);
    let b = category("B", false, 2);
    let cfg = LayoutConfig {
        weighting: Weighting::Linear,
        max_area_fraction: 0.5,
        inner_padding: 0.0,
        ..Default::default()
    };
    let regions = compute_layout(&[("big", &big), ("a", &a), ("b", &b)], &cfg);
    let share = regions[0].rect.area() / cfg.available_area().area();
    assert!(share <= 0.5 + 0.01, "share {}", share);
}

#[test]
fn min_area_fraction_holds_next_to_a_capped_category() {
    let big = category("Big", false, 100);
    let small: Vec<Category> = (0..29).map(|i| category(&format!("S{}", i), false, 1)).collect();
    let keys: Vec<String> = (0..29).map(|i| format!("s{}", i)).collect();
    let mut cats = vec![("big", &big)];
    cats.extend(keys.iter().map(String::as_str).zip(&small));

    let cfg = LayoutConfig {
        weighting: Weighting::Linear,
        inner_padding: 0.0,
        ..Default::default()
    };
    let regions = compute_layout(&cats, &cfg);
    assert_eq!(regions.len(), 30);
    let total = cfg.available_area().area();
    for r in &regions[1..] {
        let share = r.rect.area() / total;
        assert!(share >= 0.02 - 0.001, "{} share {}", r.key, share);
    }
    assert_tiles(&regions, &cfg);
}

#[test]
fn layout_is_deterministic() {
    let ai = category("AI", true, 20);
    let nft = category("NFT", true, 3);
    let other = category("Other", false, 50);
    let cats = vec![("ai", &ai), ("nft", &nft), ("other", &other)];
    let cfg = LayoutConfig::default();
    let first = serde_json::to_string(&compute_layout(&cats, &cfg)).unwrap();
    let second = serde_json::to_string(&compute_layout(&cats, &cfg)).unwrap();
    assert_eq!(first, second);
}

fn grid_cfg() -> LayoutConfig {
    LayoutConfig {
        min_icon_size: 40.0,
        max_icon_size: 80.0,
        icon_gap: 8.0,
        ..Default::default()
    }
}

#[test]
fn thirty_seven_projects_fit_in_400_by_300() {
    let grid = resolve_icon_grid(400.0, 300.0, 37, &grid_cfg());
    assert!(grid.columns * grid.rows >= 37);
    assert_eq!(grid.displayed, 37);
    assert_eq!(grid.overflow, 0);
    assert!(grid.icon_size >= 40.0 && grid.icon_size <= 80.0);
    assert!(grid.columns > grid.rows, "wide box wants more columns");
}

#[test]
fn too_many_projects_truncate_instead_of_shrinking() {
    let grid = resolve_icon_grid(400.0, 300.0, 120, &grid_cfg());
    // 8 columns x 6 rows at 40px with 8px gaps, one cell for the marker.
    assert_eq!(grid.columns, 8);
    assert_eq!(grid.rows, 6);
    assert_eq!(grid.displayed, 47);
    assert_eq!(grid.overflow, 120 - 47);
    assert!(grid.overflow_cell);
    assert!(grid.icon_size >= 40.0);
}

#[test]
fn truncation_without_marker_cell() {
    let cfg = LayoutConfig {
        reserve_overflow_cell: false,
        ..grid_cfg()
    };
    let grid = resolve_icon_grid(400.0, 300.0, 120, &cfg);
    assert_eq!(grid.displayed, 48);
    assert_eq!(grid.overflow, 72);
    assert!(!grid.overflow_cell);
}

#[test]
fn few_projects_are_capped_at_max_size() {
    let grid = resolve_icon_grid(400.0, 300.0, 2, &grid_cfg());
    assert_eq!(grid.displayed, 2);
    assert_eq!(grid.icon_size, 80.0);
    assert_eq!((grid.columns, grid.rows), (2, 1));
}

#[test]
fn box_smaller_than_one_icon_shows_nothing() {
    let grid = resolve_icon_grid(30.0, 300.0, 5, &grid_cfg());
    assert_eq!(grid.displayed, 0);
    assert_eq!(grid.overflow, 5);
    assert_eq!(grid.icon_size, 40.0);
}

#[test]
fn empty_category_has_no_overflow() {
    let grid = resolve_icon_grid(400.0, 300.0, 0, &grid_cfg());
    assert_eq!(grid.displayed, 0);
    assert_eq!(grid.overflow, 0);
    assert!(grid.icon_size >= 40.0 && grid.icon_size <= 80.0);
}

#[test]
fn region_projects_are_truncated_with_exact_overflow() {
    let crowded = category("Crowded", false, 500);
    let cfg = LayoutConfig {
        canvas_width: 600.0,
        canvas_height: 400.0,
        ..grid_cfg()
    };
    let regions = compute_layout(&[("crowded", &crowded)], &cfg);
    let r = &regions[0];
    assert!(r.overflow > 0);
    assert_eq!(r.overflow, 500 - r.projects.len());
    assert_eq!(r.projects[0].name, "Crowded 0");
    assert_eq!(r.icon_cells().len(), r.projects.len() + 1);
    assert_grid_bounds(&regions, &cfg);
}

#[test]
fn layout_visible_skips_hidden_categories() {
    use ecomap::aggregate::categorize_projects;
    use ecomap::model::RawProject;

    let cats = categorize_projects(&[
        RawProject::new("1", "Alpha").with_tag("ai", "AI"),
        RawProject::new("2", "Beta").with_tag("defi", "DeFi"),
    ]);
    let mut visible = VisibleSet::all(&cats, false);
    visible.set("defi", true);
    let regions = layout_visible(&cats, &visible, &LayoutConfig::default());
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].key, "defi");
}

#[test]
fn split_keeps_shared_edges() {
    let (a, b) = Rect::new(0.0, 0.0, 101.0, 50.0).split_longer(0.5);
    assert_eq!(a.right(), b.x);
    assert_eq!(a.w + b.w, 101.0);
    assert_eq!(a.w.fract(), 0.0);
}
