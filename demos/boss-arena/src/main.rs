//! Boss arena — a scripted pilot plays a purpose-built level headless
//! and logs everything the simulation reports. No graphics; this is a
//! smoke run for the whole world loop: restock bottles, close in,
//! pelt the boss, repeat.

use cluck_sim::input::keys::{KEY_LEFT, KEY_RIGHT, KEY_SPACE, KEY_THROW};
use cluck_sim::{
    CoinSpawn, EnemyKindDef, EnemySpawn, EntityKind, InputEvent, LevelDef, SimConfig, SimEvent,
    SnapshotBuffer, World,
};

const FRAME: f32 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 180;
/// Stand-and-throw distance, close enough that a bottle arc reaches.
const THROW_RANGE: f32 = 300.0;

/// What the pilot is currently trying to do.
#[derive(Clone, Copy, PartialEq)]
enum Plan {
    Restock,
    Engage,
}

/// Keys currently held, so only edges are pushed into the world.
#[derive(Default)]
struct Latch {
    left: bool,
    right: bool,
    space: bool,
    throw: bool,
}

fn sync(world: &mut World, held: &mut bool, key_code: u32, want: bool) {
    if *held != want {
        *held = want;
        world.push_input(if want {
            InputEvent::KeyDown { key_code }
        } else {
            InputEvent::KeyUp { key_code }
        });
    }
}

/// A short level with enough bottles to actually win: ten on the
/// ground, boss at the far end, some poultry in the way.
fn arena() -> LevelDef {
    LevelDef {
        level_end_x: 1400.0,
        enemies: vec![
            EnemySpawn { kind: EnemyKindDef::Chicken, x: 500.0, walk_speed: None },
            EnemySpawn { kind: EnemyKindDef::SmallChicken, x: 700.0, walk_speed: Some(0.5) },
        ],
        clouds: vec![60.0, 520.0, 980.0],
        coins: (0..5).map(|i| CoinSpawn { x: 360.0 + 120.0 * i as f32, y: 370.0 }).collect(),
        bottles: vec![
            260.0, 330.0, 400.0, 470.0, 540.0, 610.0, 680.0, 750.0, 820.0, 890.0,
        ],
        backdrops: vec![0.0, 719.0],
        boss_x: Some(1100.0),
    }
}

fn report(event: &SimEvent) {
    match event {
        SimEvent::PlayerHurt { energy } => log::info!("took a hit, {energy} energy left"),
        SimEvent::PlayerDefeated => log::warn!("the player is down"),
        SimEvent::EnemyStomped { .. } => log::info!("stomped a chicken"),
        SimEvent::BottleThrown => log::debug!("bottle away"),
        SimEvent::BottleShattered { x, .. } => log::debug!("bottle broke at x={x:.0}"),
        SimEvent::CoinCollected { total } => log::info!("coin #{total}"),
        SimEvent::BottleCollected { total } => log::debug!("restocked ({total} carried)"),
        SimEvent::BossPhaseChanged { phase } => log::warn!("the boss is angrier now: phase {phase}"),
        SimEvent::BossActionStarted { kind } => log::debug!("boss move: {kind:?}"),
        SimEvent::BossDefeated => log::info!("the boss is down!"),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut world = match World::new(arena(), SimConfig::default()) {
        Ok(world) => world,
        Err(err) => {
            log::error!("arena rejected: {err}");
            std::process::exit(1);
        }
    };

    let mut latch = Latch::default();
    let mut plan = Plan::Restock;
    let mut deaths = 0u32;

    for _ in 0..MAX_FRAMES {
        let player = world.scene().player().filter(|p| !p.is_dead()).map(|p| p.center_x());
        let boss = world.scene().boss().filter(|b| !b.is_dead()).map(|b| b.center_x());
        let carried = world.carried_bottles();

        let mut want_left = false;
        let mut want_right = false;
        let mut want_throw = false;
        let mut want_jump = false;

        if let Some(px) = player {
            let ground_bottle = world
                .scene()
                .iter()
                .filter(|e| e.kind == EntityKind::Bottle && e.collectible)
                .map(|e| e.center_x())
                .min_by(|a, b| (a - px).abs().total_cmp(&(b - px).abs()));

            plan = match plan {
                Plan::Restock if carried >= 5 || ground_bottle.is_none() => Plan::Engage,
                Plan::Engage if carried == 0 && ground_bottle.is_some() => Plan::Restock,
                keep => keep,
            };

            match plan {
                Plan::Restock => {
                    if let Some(bx) = ground_bottle {
                        want_right = bx > px + 20.0;
                        want_left = bx < px - 20.0;
                    }
                }
                Plan::Engage => {
                    if let Some(bx) = boss {
                        if (bx - px).abs() > THROW_RANGE {
                            want_right = bx > px;
                            want_left = bx < px;
                        } else {
                            want_throw = carried > 0;
                        }
                    }
                }
            }

            // Hop over poultry in the walking direction.
            let dir = if want_left { -1.0 } else { 1.0 };
            want_jump = (want_left || want_right)
                && world.scene().iter().any(|e| {
                    matches!(e.kind, EntityKind::Chicken | EntityKind::SmallChicken)
                        && !e.is_dead()
                        && (e.center_x() - px) * dir > 0.0
                        && (e.center_x() - px).abs() < 160.0
                });
        }

        sync(&mut world, &mut latch.left, KEY_LEFT, want_left);
        sync(&mut world, &mut latch.right, KEY_RIGHT, want_right);
        sync(&mut world, &mut latch.space, KEY_SPACE, want_jump);
        sync(&mut world, &mut latch.throw, KEY_THROW, want_throw);

        world.advance(FRAME);
        for event in world.events() {
            report(event);
        }

        if world.boss_defeated() {
            log::info!(
                "victory in {:.1}s with {} coins collected",
                world.now(),
                world.coins()
            );
            break;
        }
        if world.player_defeated() {
            deaths += 1;
            if deaths > 1 {
                log::error!("flattened twice, calling it");
                break;
            }
            log::warn!("flattened at {:.1}s, one more try", world.now());
            world.restart();
            latch = Latch::default();
            plan = Plan::Restock;
        }
    }

    let mut snap = SnapshotBuffer::new();
    world.snapshot(&mut snap);
    log::info!(
        "final frame: t={:.1}s, {} sprites, camera at x={:.0}",
        world.now(),
        snap.sprite_count(),
        snap.camera_x
    );
}
