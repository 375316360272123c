use plotters::prelude::*;

use prm::{ObstacleField, ObstacleMap, PrmBuilder, Rectangle as Obstacle};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 800.0;

fn rect(x: f64, y: f64, w: f64, h: f64) -> Result<Obstacle, prm::PrmError> {
    Obstacle::new(x, y, w, h)
}

fn to_pixel(p: &nalgebra::Point2<f64>) -> (i32, i32) {
    (p.x as i32, p.y as i32)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let map = ObstacleMap::new(WIDTH, HEIGHT)?.extend_obstacles(vec![
        rect(0.0, 0.0, WIDTH * 0.5, HEIGHT * 0.1)?,
        rect(WIDTH * 0.4, HEIGHT * 0.3, WIDTH * 0.3, HEIGHT * 0.3)?,
        rect(WIDTH * 0.2, HEIGHT * 0.8, WIDTH * 0.6, HEIGHT * 0.1)?,
    ]);

    let k = 5;
    let roadmap = PrmBuilder::new(&map, k, 150.0)
        .with_num_vertices(300)
        .build()?;

    eprintln!(
        "{} vertices, {} edges, {} with fewer than {} neighbours",
        roadmap.num_vertices(),
        roadmap.num_edges(),
        roadmap.under_connected(k).count(),
        k,
    );

    let soft_red = RGBColor(200, 50, 50);
    let edge_color = RGBColor(90, 200, 255);

    let root = BitMapBackend::new("roadmap.png", (map.width() as u32, map.height() as u32))
        .into_drawing_area();
    root.fill(&WHITE)?;

    for obstacle in map.obstacles() {
        root.draw(&Rectangle::new(
            [to_pixel(&obstacle.corner()), to_pixel(&obstacle.far_corner())],
            ShapeStyle::from(&soft_red).filled(),
        ))?;
    }

    for (u, v) in roadmap.edges() {
        root.draw(&PathElement::new(
            vec![to_pixel(&roadmap.vertices()[u]), to_pixel(&roadmap.vertices()[v])],
            ShapeStyle::from(&edge_color),
        ))?;
    }

    for p in roadmap.vertices() {
        root.draw(&Circle::new(
            to_pixel(p),
            3,
            ShapeStyle::from(&BLACK).filled(),
        ))?;
    }

    root.present()?;

    Ok(())
}
