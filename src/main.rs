use anyhow::Result;
use glam::Vec2;
use log::{debug, info};

use stagefall::engine::game_loop::TickLoop;
use stagefall::engine::physics::Platform;
use stagefall::game::characters::{CharacterId, CharacterStats};
use stagefall::game::events::CombatEvent;
use stagefall::game::particles::ParticleSystem;
use stagefall::game::session::MatchSession;
use stagefall::game::tuning::Tuning;

/// Give up after three minutes of simulated time
const MAX_TICKS: u64 = 3 * 60 * 60;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Stagefall headless demo match...");

    let tuning = Tuning::default();
    tuning.validate()?;

    // Main stage plus two floating side platforms
    let platforms = vec![
        Platform::new(290.0, 600.0, 700.0, 40.0),
        Platform::new(360.0, 440.0, 180.0, 20.0),
        Platform::new(740.0, 440.0, 180.0, 20.0),
    ];

    let mut session = MatchSession::new(tuning, platforms);
    let ember = session.spawn_character(
        "Ember",
        CharacterStats::with_color([1.0, 0.35, 0.2, 1.0]),
        Vec2::new(480.0, 400.0),
    );
    let gale = session.spawn_character(
        "Gale",
        CharacterStats::with_color([0.3, 0.6, 1.0, 1.0]),
        Vec2::new(752.0, 400.0),
    );

    let mut particles = ParticleSystem::new();
    let tick_loop = TickLoop::new();

    while session.tick_count() < MAX_TICKS {
        drive(&mut session, ember, gale);
        drive(&mut session, gale, ember);
        session.tick();

        for event in session.drain_events() {
            particles.handle_event(&event);
            report(&session, &event);
        }
        particles.update();

        if session.is_over() {
            break;
        }
    }

    match session.winner().and_then(|id| session.get(id)) {
        Some(winner) => info!(
            "{} wins with {} stock(s) after {} ticks ({:.1}s wall clock)",
            winner.name,
            winner.stocks(),
            session.tick_count(),
            tick_loop.elapsed().as_secs_f32(),
        ),
        None => info!("Time out after {} ticks, match drawn", session.tick_count()),
    }

    Ok(())
}

/// Minimal scripted brawler: close the gap, then trade pokes with the
/// occasional charged smash. Stands in for the out-of-process input/AI
/// collaborators, which only ever call these same action methods.
fn drive(session: &mut MatchSession, me: CharacterId, foe: CharacterId) {
    let Some(target) = session.get(foe).map(|c| c.position) else {
        return;
    };
    let tick = session.tick_count();
    let Some(fighter) = session.get_mut(me) else {
        return;
    };
    if fighter.is_dying() {
        return;
    }

    let gap = target.x - fighter.position.x;
    if gap.abs() > 90.0 {
        if gap > 0.0 {
            fighter.move_right();
        } else {
            fighter.move_left();
        }
        if target.y + 60.0 < fighter.position.y && fighter.is_grounded() {
            fighter.jump();
        }
    } else if tick % 9 == 0 {
        fighter.forward_smash(60.0);
    } else {
        fighter.jab();
    }
}

fn report(session: &MatchSession, event: &CombatEvent) {
    let name = |id: &CharacterId| {
        session
            .get(*id)
            .map_or("?".to_string(), |character| character.name.clone())
    };
    match event {
        CombatEvent::Hit {
            attacker,
            defender,
            damage,
            ..
        } => debug!("{} hit {} for {damage}", name(attacker), name(defender)),
        CombatEvent::ShieldBreak { defender } => info!("{}'s shield broke!", name(defender)),
        CombatEvent::DeathStart {
            character,
            stocks_remaining,
        } => info!("{} was KO'd ({stocks_remaining} stocks left)", name(character)),
        CombatEvent::Respawn { character } => debug!("{} respawned", name(character)),
        CombatEvent::Eliminated { character } => info!("{} is out!", name(character)),
        _ => {}
    }
}
