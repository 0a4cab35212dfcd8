use crate::tui::app::App;
use crate::tui::draw::draw_app;
use clap::{Parser, Subcommand};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use gridpath::{GridConfig, GridResult, GridSession, NodeId, ShortestPaths};
use log::info;
use std::time::Duration;

mod tui;

/// Compares standard and power-aware shortest paths over a random grid.
#[derive(Parser, Debug)]
#[command(name = "gridpath")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of nodes.
    #[arg(short, long, default_value_t = 10)]
    nodes: usize,

    /// Probability that any node pair is linked.
    #[arg(short, long, default_value_t = 0.4)]
    density: f64,

    /// Seed for reproducible topologies.
    #[arg(long)]
    seed: Option<u64>,

    /// Source node.
    #[arg(short, long, default_value_t = 0)]
    source: usize,

    /// Destination node, defaults to the node after the source.
    #[arg(short, long)]
    target: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive terminal dashboard.
    Dashboard,

    /// Print the comparison and exit.
    Report {
        /// Also print every traversal step.
        #[arg(long)]
        trace: bool,
    },
}

fn main() -> GridResult<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GridConfig {
        num_nodes: cli.nodes,
        density: cli.density,
        seed: cli.seed,
        ..GridConfig::default()
    };
    let session = GridSession::new(config)?;
    let source = NodeId(cli.source);
    let target = NodeId(
        cli.target
            .unwrap_or_else(|| (cli.source + 1).min(cli.nodes.saturating_sub(1))),
    );

    session.standard().node_by_id(source)?;
    session.standard().node_by_id(target)?;

    match cli.command {
        Some(Commands::Report { trace }) => cmd_report(&session, source, target, trace),
        Some(Commands::Dashboard) | None => cmd_dashboard(session, source, target),
    }
}

fn cmd_dashboard(session: GridSession, source: NodeId, target: NodeId) -> GridResult<()> {
    let mut app = App::new(session, source, target)?;
    let mut terminal = ratatui::init();
    info!("dashboard started from source {}", source);

    loop {
        terminal.draw(|frame| draw_app(frame, &app))?;

        if crossterm::event::poll(Duration::from_millis(16))? {
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char(' ') | KeyCode::Right => app.next_step(),
                    KeyCode::Left => app.prev_step(),
                    KeyCode::Char('s') => app.cycle_source()?,
                    KeyCode::Char('d') => app.cycle_target(),
                    KeyCode::Char('r') => app.regenerate()?,
                    _ => continue,
                },
                _ => continue,
            }
        }
    }
    Ok(())
}

fn print_routes(label: &str, run: &ShortestPaths) {
    println!("{} routes:", label);
    for route in run.routes() {
        println!(
            "  {} -> {}: {} (cost {:.2})",
            run.source(),
            route.target,
            route,
            route.cost
        );
    }
}

fn print_trace(label: &str, run: &ShortestPaths) {
    println!("{} trace:", label);
    for step in run.trace().steps() {
        let distances = step
            .distances()
            .iter()
            .map(|(id, d)| {
                if d.is_finite() {
                    format!("{}:{:.2}", id, d)
                } else {
                    format!("{}:inf", id)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("  #{:<3} visited {:<3} {}", step.step(), step.visited(), distances);
    }
}

fn cmd_report(session: &GridSession, source: NodeId, target: NodeId, trace: bool) -> GridResult<()> {
    let comparison = session.compare(source)?;
    let standard = session.standard();
    let power = session.power_aware();

    println!(
        "nodes {}  edges {}  seed {:?}  source {}",
        standard.node_count(),
        standard.edge_count(),
        session.seed(),
        source
    );

    println!("edges (base / standard / power-aware):");
    for edge in standard.edges() {
        let power_weight = power
            .edge_between(edge.from(), edge.to())
            .map(|e| e.weight())
            .unwrap_or(f64::INFINITY);
        println!(
            "  {:>3} - {:<3} {:>6.2} {:>6.2} {:>6.2}",
            edge.from(),
            edge.to(),
            edge.base_cost(),
            edge.weight(),
            power_weight
        );
    }

    println!("{:>5} {:>10} {:>12} {:>9}", "node", "standard", "power-aware", "change");
    for row in comparison.rows() {
        let improvement = row
            .improvement_pct()
            .map(|p| format!("{:.1}%", p))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>5} {:>10.2} {:>12.2} {:>9}",
            row.node(),
            row.standard_cost(),
            row.power_cost(),
            improvement
        );
    }

    let summary = comparison.summary();
    println!(
        "reachable {}  cheaper {}  costlier {}  mean change {}",
        summary.reachable(),
        summary.cheaper(),
        summary.costlier(),
        summary
            .mean_improvement_pct()
            .map(|p| format!("{:.1}%", p))
            .unwrap_or_else(|| "-".to_string())
    );
    println!(
        "time standard {:?}  power-aware {:?}",
        comparison.standard().elapsed(),
        comparison.power_aware().elapsed()
    );

    println!(
        "destination {}: standard {}, power-aware {}",
        target,
        comparison.standard().route_to(target)?,
        comparison.power_aware().route_to(target)?
    );

    print_routes("standard", comparison.standard());
    print_routes("power-aware", comparison.power_aware());

    if trace {
        print_trace("standard", comparison.standard());
        print_trace("power-aware", comparison.power_aware());
    }
    Ok(())
}
