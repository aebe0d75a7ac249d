use{
    std::{
        env,
        process::ExitCode,
        time::Instant
    },
    structopt::StructOpt,
    tracing::error,
    tracing_subscriber::{EnvFilter, fmt, prelude::*},
};

pub mod compare;
pub mod rank_nodes;

fn main() -> ExitCode {
    init_tracing();
    let start_time = Instant::now();
    let opt = CmdOption::from_args();
    let res = match opt{
        CmdOption::Compare(o) => o.execute(),
        CmdOption::Rank(o) => o.execute(),
    };
    if let Err(e) = res {
        error!("{e}");
        return ExitCode::FAILURE;
    }
    println!("Execution took {}",humantime::format_duration(start_time.elapsed()));
    ExitCode::SUCCESS
}

fn init_tracing()
{
    let filter = EnvFilter::try_from_env("PAGERANK_VAX_LOG")
        .unwrap_or_else(|_| {
            EnvFilter::new(if env::var("DEBUG").is_ok() {
                "pagerank_vax=debug,info"
            } else {
                "pagerank_vax=info,warn"
            })
        });
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Epidemic spreading with PageRank based vaccination!")]
pub enum CmdOption
{
    Compare(compare::Compare),
    Rank(rank_nodes::RankNodes),
}
