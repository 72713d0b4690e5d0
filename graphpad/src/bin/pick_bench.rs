//! Pick cost per edge shape. Straight chords, curved fans and self-loops are
//! laid out on separate graphs and probed at their drawn midpoints, so the
//! numbers compare segment, sampled-curve and arc hit tests directly.
//!
//! `pick_bench [--nodes=N] [--rounds=R] [--samples=S]`

use std::time::{Duration, Instant};

use graphpad::{Graph, Pick, Vec2, ViewportConfig};

const COLUMNS: usize = 40;
const SPACING: f32 = 80.0;

#[derive(Clone, Copy, Debug)]
enum Layout {
    Straight,
    Fan,
    Loops,
}

impl Layout {
    const ALL: [Layout; 3] = [Layout::Straight, Layout::Fan, Layout::Loops];

    fn build(self, nodes: usize) -> Graph {
        let mut g = Graph::new();
        let ids: Vec<u32> = (0..nodes)
            .map(|i| {
                let (col, row) = (i % COLUMNS, i / COLUMNS);
                g.add_node(col as f32 * SPACING, row as f32 * SPACING)
            })
            .collect();
        for (k, &a) in ids.iter().enumerate() {
            let right = ids.get(k + 1).filter(|_| (k + 1) % COLUMNS != 0);
            match (self, right) {
                (Layout::Straight, Some(&b)) => {
                    let _ = g.add_edge(a, b);
                }
                // The first edge of a fan is straight, the rest curve.
                (Layout::Fan, Some(&b)) => {
                    for _ in 0..4 {
                        let _ = g.add_edge(a, b);
                    }
                }
                (Layout::Loops, _) => {
                    for _ in 0..3 {
                        let _ = g.add_edge(a, a);
                    }
                }
                _ => {}
            }
        }
        g
    }
}

struct Run {
    edges: u32,
    picks: usize,
    edge_hits: usize,
    elapsed: Duration,
}

fn probe(g: &Graph, cfg: &ViewportConfig, rounds: usize) -> Run {
    let targets: Vec<Vec2> = g
        .edges()
        .filter_map(|(id, _)| g.edge_shape(id, cfg))
        .map(|s| s.midpoint())
        .collect();
    let mut edge_hits = 0;
    let started = Instant::now();
    for _ in 0..rounds {
        for p in &targets {
            if let Some(Pick::Edge { .. }) = g.pick(p.x, p.y, cfg) {
                edge_hits += 1;
            }
        }
    }
    Run {
        edges: g.edge_count(),
        picks: targets.len() * rounds,
        edge_hits,
        elapsed: started.elapsed(),
    }
}

fn main() {
    let mut nodes = 400usize;
    let mut rounds = 5usize;
    let mut cfg = ViewportConfig::default();
    for arg in std::env::args().skip(1) {
        let Some((key, val)) = arg.split_once('=') else {
            eprintln!("ignoring {}", arg);
            continue;
        };
        match key {
            "--nodes" => nodes = val.parse().unwrap_or(nodes),
            "--rounds" => rounds = val.parse().unwrap_or(rounds),
            "--samples" => cfg.curve_samples = val.parse().unwrap_or(cfg.curve_samples),
            _ => eprintln!("unknown flag {}", key),
        }
    }

    for layout in Layout::ALL {
        let g = layout.build(nodes);
        let run = probe(&g, &cfg, rounds);
        let per_pick = run.elapsed.as_secs_f64() * 1e9 / run.picks.max(1) as f64;
        println!(
            "{:<8} edges={:>6} picks={:>7} edge_hits={:>7} total_ms={:>9.3} ns_per_pick={:>10.1}",
            format!("{:?}", layout).to_lowercase(),
            run.edges,
            run.picks,
            run.edge_hits,
            run.elapsed.as_secs_f64() * 1000.0,
            per_pick,
        );
    }
}
