use std::error::Error;

use approach_path::math::Point2d;
use approach_path::{path_length, Entity, MobileState, PathConfig, PathSession};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// The size of the field used for random scenes.
const FIELD_SIZE: (f64, f64) = (800.0, 480.0);

/// The number of obstacles scattered in a random scene.
const RANDOM_OBSTACLES: usize = 10;

/// One end of the path, as written in a scene file.
#[derive(Deserialize, Serialize)]
struct SceneEnd {
    pos: Point2d,
    #[serde(default)]
    heading: f64,
}

/// A scene file.
#[derive(Deserialize, Serialize)]
struct Scene {
    #[serde(default)]
    config: PathConfig,
    source: SceneEnd,
    target: SceneEnd,
    #[serde(default)]
    obstacles: Vec<Point2d>,
}

impl Scene {
    /// A scene with the source in the middle of the field, the target below it,
    /// and obstacles scattered at random.
    fn random(rng: &mut impl Rng) -> Self {
        let (w, h) = FIELD_SIZE;
        let obstacles = (0..RANDOM_OBSTACLES)
            .map(|_| {
                Point2d::new(
                    rng.gen_range(1..w as i32) as f64,
                    rng.gen_range(1..h as i32) as f64,
                )
            })
            .collect();
        Self {
            config: PathConfig::default(),
            source: SceneEnd {
                pos: Point2d::new(w / 2.0, h / 2.0),
                heading: rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI),
            },
            target: SceneEnd {
                pos: Point2d::new(w / 2.0, 3.0 * h / 4.0),
                heading: rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI),
            },
            obstacles,
        }
    }

    fn into_session(self) -> Result<PathSession, approach_path::PathError> {
        let mut session = PathSession::with_states(
            self.config,
            MobileState::new(self.source.pos, self.source.heading),
            MobileState::new(self.target.pos, self.target.heading),
        )?;
        for point in self.obstacles {
            session.add_obstacle(point);
        }
        Ok(session)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let scene = match args.as_slice() {
        [flag, seed @ ..] if flag == "--random" => {
            let mut rng = match seed.first() {
                Some(seed) => rand::rngs::StdRng::seed_from_u64(seed.parse()?),
                None => rand::rngs::StdRng::from_entropy(),
            };
            Scene::random(&mut rng)
        }
        [path] => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        _ => {
            eprintln!("usage: approach-path <scene.json> | --random [seed]");
            std::process::exit(2);
        }
    };

    let session = scene.into_session()?;
    let samples = session.compute_path();
    let control = match session.compute_control_point() {
        Ok(point) => Some(point),
        Err(err) => {
            log::info!("no control point: {err}");
            None
        }
    };
    let source = session.state(Entity::Source);

    #[allow(unused_mut)]
    let mut output = json!({
        "source": source,
        "target": session.state(Entity::Target),
        "obstacles": session.obstacles(),
        "control_point": control,
        "length": path_length(source.pos, &samples),
        "samples": samples,
    });
    #[cfg(feature = "debug")]
    {
        output["debug"] = serde_json::to_value(approach_path::take_debug_frame())?;
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
