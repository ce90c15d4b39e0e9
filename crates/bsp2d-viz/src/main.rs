use bsp2d::{BspTree, Point2};
use bsp2d_viz::{demo, draw_scene, ScreenMapping, ViewConfig, World};
use log::{error, info};
use macroquad::prelude::*;

struct Scene {
    name: &'static str,
    world: World,
    tree: BspTree,
}

fn load_scenes() -> Vec<Scene> {
    let levels = [
        ("room with pillars", demo::room_with_pillars()),
        ("square room", demo::square_room(1.0)),
    ];

    let mut scenes = Vec::new();
    for (name, walls) in levels {
        let world = match walls {
            Ok(walls) => World::new(walls),
            Err(err) => {
                error!("skipping scene '{}': {}", name, err);
                continue;
            }
        };
        match world.bsp_tree() {
            Ok(tree) => {
                info!(
                    "scene '{}': {} walls partitioned into {} fragments, depth {}",
                    name,
                    world.polygons().len(),
                    tree.polygon_count(),
                    tree.depth()
                );
                scenes.push(Scene { name, world, tree });
            }
            Err(err) => error!("skipping scene '{}': {}", name, err),
        }
    }
    scenes
}

fn window_conf() -> Conf {
    let config = ViewConfig::default();
    Conf {
        window_title: "BSP".to_owned(),
        window_width: config.window_width,
        window_height: config.window_height,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = ViewConfig::default();
    let scenes = load_scenes();
    if scenes.is_empty() {
        error!("no scene could be built");
        return;
    }

    let mut current = 0;
    let mut viewpoint = scenes[current].world.center();

    loop {
        if is_key_pressed(KeyCode::Tab) {
            current = (current + 1) % scenes.len();
            viewpoint = scenes[current].world.center();
            info!("switched to scene '{}'", scenes[current].name);
        }

        let scene = &scenes[current];
        let mapping = ScreenMapping::new(
            scene.world.min(),
            scene.world.max(),
            screen_width(),
            screen_height(),
            config.margin,
        );

        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            viewpoint = mapping.to_world(Point2::new(x, y));
        }

        clear_background(WHITE);
        draw_scene(&scene.world, &scene.tree, viewpoint, &mapping, &config);
        draw_text(
            &format!("{} | click: move viewpoint | Tab: next scene", scene.name),
            4.0,
            screen_height() - 6.0,
            config.font_size,
            DARKGRAY,
        );

        next_frame().await
    }
}
