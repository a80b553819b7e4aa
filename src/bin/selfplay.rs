//! Play the engine against itself and print the game.
//!
//! Usage: selfplay [skill-level] [max-plies]

use woodpusher::board::search_with_report;
use woodpusher::game::Game;
use woodpusher::SkillLevel;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let skill = SkillLevel::new(
        args.next()
            .and_then(|v| v.parse().ok())
            .unwrap_or(SkillLevel::default().level()),
    );
    let max_plies: usize = args.next().and_then(|v| v.parse().ok()).unwrap_or(100);
    let depth = skill.search_depth();

    println!("selfplay at skill {skill} (depth {depth}), up to {max_plies} plies");

    let mut game = Game::new();
    let mut total_nodes = 0u64;

    for ply in 1..=max_plies {
        let side = game.turn();
        let report = search_with_report(game.board(), side, depth);
        total_nodes += report.nodes;

        let Some(mv) = report.best_move else {
            println!("{side} has no moves after {} plies", ply - 1);
            break;
        };

        if let Err(e) = game.try_move(mv) {
            // Search only proposes generated moves, so this cannot happen
            eprintln!("search proposed unplayable move: {e}");
            break;
        }

        println!(
            "{ply:3}. {side:5} {mv}  score {:6}  nodes {}",
            report.score, report.nodes
        );
    }

    println!("\n{}", game.board());
    println!("\nmoves: {}", game.state().history_notation().join(" "));
    println!("total nodes: {total_nodes}");
}
