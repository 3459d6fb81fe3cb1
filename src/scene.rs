//! Scene transforms and name-based entity binding
//!
//! The scene is the transform/camera set handed over by the asset loader. The
//! simulation binds to it once by name and writes its results back into the
//! same transforms every frame.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DUCK_NAME, FIELD_LENGTH, HEAD_NAME, OBSTACLE_COUNT, OBSTACLE_PREFIX};
use crate::settings::SettingsError;
use crate::sim::{Duck, GameState, Head, Obstacle};

/// A named node with position, rotation and scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub name: String,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Quat,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl Transform {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

/// The scene camera; gameplay never moves it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Index of the transform the camera hangs from
    pub transform: usize,
    /// Width / height, set from the drawable size before each draw
    #[serde(default = "default_aspect")]
    pub aspect: f32,
}

fn default_aspect() -> f32 {
    1.0
}

impl Camera {
    pub fn new(transform: usize) -> Self {
        Self {
            transform,
            aspect: default_aspect(),
        }
    }
}

/// Transforms and cameras making up one loaded scene
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub transforms: Vec<Transform>,
    #[serde(default)]
    pub cameras: Vec<Camera>,
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("{0} not found")]
    MissingTransform(&'static str),
    #[error("expected {expected} obstacles named '{prefix}*', found {found}")]
    ObstacleCount {
        prefix: String,
        expected: usize,
        found: usize,
    },
    #[error("expecting scene to have exactly one camera, but it has {0}")]
    CameraCount(usize),
    #[error("camera points at transform {index}, but the scene has {len}")]
    CameraTransform { index: usize, len: usize },
    #[error("malformed scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Index of the transform with exactly this name
    pub fn find(&self, name: &str) -> Option<usize> {
        self.transforms.iter().position(|t| t.name == name)
    }

    /// Indices of transforms whose name starts with `prefix`, in scene order
    pub fn find_prefixed(&self, prefix: &str) -> Vec<usize> {
        self.transforms
            .iter()
            .enumerate()
            .filter(|(_, t)| t.name.starts_with(prefix))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.cameras.first()
    }

    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        self.cameras.first_mut()
    }

    /// The default play scene: a duck with its head, a camera looking down
    /// the lane, and a row of icospheres
    pub fn reference() -> Self {
        let mut transforms = vec![
            Transform::new(DUCK_NAME, Vec3::new(5.0, 0.0, 0.0)),
            Transform {
                rotation: Quat::from_rotation_x(90.0_f32.to_radians()),
                ..Transform::new(HEAD_NAME, Vec3::new(5.5, 0.0, 1.2))
            },
            Transform {
                rotation: Quat::from_rotation_y(-60.0_f32.to_radians()),
                ..Transform::new("Camera", Vec3::new(20.0, 0.0, 12.0))
            },
        ];

        let spacing = FIELD_LENGTH / OBSTACLE_COUNT as f32;
        transforms.extend((0..OBSTACLE_COUNT).map(|i| {
            // Blender-style names: Icosphere, Icosphere.001, ...
            let name = match i {
                0 => OBSTACLE_PREFIX.to_string(),
                _ => format!("{OBSTACLE_PREFIX}.{i:03}"),
            };
            Transform::new(name, Vec3::new(-(i as f32) * spacing, 0.0, 0.5))
        }));

        Self {
            transforms,
            cameras: vec![Camera::new(2)],
        }
    }
}

/// Transform indices the simulation reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneBindings {
    pub duck: usize,
    pub head: usize,
    /// Obstacles in discovery order
    pub obstacles: Vec<usize>,
}

impl SceneBindings {
    /// Look up the duck, head, obstacles and camera; any gap is fatal
    pub fn resolve(scene: &Scene, obstacle_prefix: &str, expected: usize) -> Result<Self, SceneError> {
        let head = scene
            .find(HEAD_NAME)
            .ok_or(SceneError::MissingTransform(HEAD_NAME))?;
        let duck = scene
            .find(DUCK_NAME)
            .ok_or(SceneError::MissingTransform(DUCK_NAME))?;

        let obstacles = scene.find_prefixed(obstacle_prefix);
        if obstacles.len() != expected {
            return Err(SceneError::ObstacleCount {
                prefix: obstacle_prefix.to_string(),
                expected,
                found: obstacles.len(),
            });
        }

        if scene.cameras.len() != 1 {
            return Err(SceneError::CameraCount(scene.cameras.len()));
        }
        let camera = &scene.cameras[0];
        if camera.transform >= scene.transforms.len() {
            return Err(SceneError::CameraTransform {
                index: camera.transform,
                len: scene.transforms.len(),
            });
        }

        Ok(Self {
            duck,
            head,
            obstacles,
        })
    }

    /// Capture the simulated entities from their current transforms
    pub fn capture(&self, scene: &Scene) -> (Duck, Head, Vec<Obstacle>) {
        let duck = Duck::new(scene.transforms[self.duck].position);
        let head = Head::new(scene.transforms[self.head].rotation);
        let obstacles = self
            .obstacles
            .iter()
            .map(|&i| {
                let t = &scene.transforms[i];
                Obstacle::new(t.position, t.scale)
            })
            .collect();
        (duck, head, obstacles)
    }

    /// Copy simulation results into the scene for drawing
    pub fn write_back(&self, state: &GameState, scene: &mut Scene) {
        scene.transforms[self.duck].position = state.duck.position;
        scene.transforms[self.head].rotation = state.head.rotation;
        for (&i, obstacle) in self.obstacles.iter().zip(&state.obstacles) {
            let t = &mut scene.transforms[i];
            t.position = obstacle.position;
            t.scale = obstacle.scale;
        }
    }
}
