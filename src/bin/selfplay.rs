use chess_rules::playout::{random_playout, PlayoutConfig, PlayoutOutcome};
use chess_rules::Team;

const GAMES: u32 = 10;

/// Usage: selfplay [games] [max_plies] [seed]
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize| args.get(i).and_then(|s| s.parse::<u64>().ok());

    let games = arg(0).map(|n| n as u32).unwrap_or(GAMES);
    let mut config = PlayoutConfig::new();
    if let Some(max_plies) = arg(1) {
        config.max_plies = max_plies as u32;
    }
    let base_seed = arg(2);

    eprintln!("selfplay (built {})", env!("BUILD_TIMESTAMP"));

    let (mut white_wins, mut black_wins, mut stalemates, mut unfinished) = (0, 0, 0, 0);
    for i in 0..games {
        config.seed = base_seed.map(|s| s + i as u64);
        let summary = match random_playout(&config) {
            Ok(summary) => summary,
            Err(e) => {
                eprintln!("game {}: engine error: {e}", i + 1);
                std::process::exit(1);
            }
        };

        let result = match summary.outcome {
            PlayoutOutcome::Checkmate { winner: Team::White } => {
                white_wins += 1;
                "White wins".to_string()
            }
            PlayoutOutcome::Checkmate { winner: Team::Black } => {
                black_wins += 1;
                "Black wins".to_string()
            }
            PlayoutOutcome::Stalemate => {
                stalemates += 1;
                "Draw by stalemate".to_string()
            }
            PlayoutOutcome::PlyLimit => {
                unfinished += 1;
                format!("stopped after {} plies", config.max_plies)
            }
        };
        eprintln!("game {}: {} plies, {result}", i + 1, summary.plies());

        let uci: Vec<String> = summary.moves.iter().map(|m| m.to_uci()).collect();
        println!("{}", uci.join(" "));
    }

    eprintln!(
        "White {white_wins}, Black {black_wins}, stalemate {stalemates}, unfinished {unfinished}"
    );
}
