use tile_geometry::{GridSampler, Point, Polygon, TileFit, TileSize};

fn main() {
    // An L-shaped room, 120 units on its long sides, 40 units thick.
    let outline = Polygon::try_new(vec![
        Point::new(0, 0),
        Point::new(120, 0),
        Point::new(120, 40),
        Point::new(40, 40),
        Point::new(40, 120),
        Point::new(0, 120),
    ])
    .unwrap();

    let tile = TileSize::new(20).unwrap();
    let strict = GridSampler::new(tile);
    let loose = strict.with_fit(TileFit::AnchorOnly);

    let bounds = outline.bounding_box().unwrap();
    println!("Outline bounds: {}", bounds);
    println!("Extent: {} x {}", bounds.width(), bounds.height());
    println!("Tile size: {}", tile);

    println!("\nOutline edges:");
    for (from, to) in outline.edges() {
        println!("{} -> {}", from, to);
    }

    let anchors = strict.generate_points(outline.vertices());
    let anchors_loose = loose.generate_points(outline.vertices());
    println!(
        "\n{} anchors with all corners inside, {} with the anchor alone inside",
        anchors.len(),
        anchors_loose.len()
    );

    // Print the grid top row first (#=tile fits, +=anchor only, .=rejected)
    println!("\nCandidate grid:");
    let candidates: Vec<Point> = strict.candidates(outline.vertices()).collect();
    let mut rows: Vec<i32> = candidates.iter().map(|p| p.y).collect();
    rows.dedup();
    for row in rows.iter().rev() {
        for candidate in candidates.iter().filter(|p| p.y == *row) {
            let cell = if anchors.contains(candidate) {
                '#'
            } else if anchors_loose.contains(candidate) {
                '+'
            } else {
                '.'
            };
            print!("{} ", cell);
        }
        println!("  y={}", row);
    }

    println!("\nAccepted anchors:");
    for anchor in &anchors {
        println!("{}", anchor);
    }
}
