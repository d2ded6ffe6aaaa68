//! Explores a small marking graph the way a model checker would.
//!
//! Builds a workshop net (two workers, one of which can break down and jam
//! the floor), walks every reachable state breadth-first through the Kripke
//! adapter, and prints each edge with its rendered condition. The deadlock
//! marking gets a self-loop; pass `--dead dead` to see the marker literal.
//!
//! Run with:
//! ```bash
//! cargo run --example explore -- --dead dead
//! ```

use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use clap::Parser;

use kripke_rs::ap::DeadProp;
use kripke_rs::dict::VarDict;
use kripke_rs::explicit::ExplicitNet;
use kripke_rs::kripke::MarkingGraph;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Property marking dead states: `true`, `false`, or a proposition name.
    #[clap(long, value_name = "STR", default_value = "true")]
    dead: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    // Two workers (tokens 1 and 2) move between `free` and `busy`. Worker 1
    // can break down while busy; a breakdown jams the whole floor, so the
    // marking with a token in `broken` has no successors.
    let mut net = ExplicitNet::new(["free", "busy", "broken"]);
    let idle = net.add_marking(&[&[1, 2], &[], &[]]);
    let w1_busy = net.add_marking(&[&[2], &[1], &[]]);
    let w2_busy = net.add_marking(&[&[1], &[2], &[]]);
    let jammed = net.add_marking(&[&[2], &[], &[1]]);
    net.add_arc(idle, w1_busy);
    net.add_arc(idle, w2_busy);
    net.add_arc(w1_busy, idle);
    net.add_arc(w1_busy, jammed);
    net.add_arc(w2_busy, idle);
    // p0: some job is running; p1: a machine is down.
    net.add_prop(0, |m| !m.place(1).is_empty());
    net.add_prop(1, |m| !m.place(2).is_empty());

    let net = Rc::new(net);
    println!("net = {:?}", net);

    let dict = Rc::new(VarDict::new());
    let graph = MarkingGraph::new(
        Rc::clone(&net),
        Rc::clone(&dict),
        ["p0", "p1"],
        DeadProp::parse(&args.dead),
    )?;

    // BFS over the reachable states, the way an emptiness check walks them.
    let mut num_edges = 0;
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(graph.init_state());
    while let Some(state) = queue.pop_front() {
        if !visited.insert(state.clone()) {
            continue;
        }
        println!("state: {}", graph.format_state(&state));
        let mut it = graph.succ_iter(&state);
        assert!(it.first(), "every state has at least one outgoing edge");
        while !it.done() {
            let succ = it.current();
            num_edges += 1;
            println!(
                "  --[{}]--> {}",
                it.cond().render(&dict),
                graph.format_state(&succ)
            );
            queue.push_back(succ);
            it.next();
        }
    }

    println!(
        "the state graph is composed of {} states and {} edges",
        visited.len(),
        num_edges
    );

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
