use std::path::PathBuf;

use cubepaint_core::Cube;
use cubepaint_prefs::Preferences;
use cubepaint_view::{NetRenderer, PaintSession, TickOutcome, export_gif};
use eyre::{Result, WrapErr};

use crate::paint::PaintArgs;

/// Paint the stickers of a Rubik's Cube and export its assembly animation.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to use instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Paint the cube, apply moves, and print the result.
    Show {
        #[command(flatten)]
        paint: PaintArgs,

        /// Whitespace-separated moves to apply. Only `U` and `U'` are
        /// supported.
        #[arg(short, long)]
        moves: Option<String>,

        /// Solve the cube after applying moves.
        #[arg(long)]
        solve: bool,
    },
    /// Paint the cube, play the assembly animation, and save it as a GIF.
    Assemble {
        #[command(flatten)]
        paint: PaintArgs,

        /// Number of times to replay the animation from the saved state.
        #[arg(long, default_value_t = 0)]
        replays: usize,

        /// File to save the animation to. Defaults to the path in the
        /// preferences.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Wait for the tick interval between animation steps.
        #[arg(long)]
        realtime: bool,
    },
    /// Print the effective preferences as YAML.
    Prefs {
        /// Print the path to the preferences file instead.
        #[arg(long)]
        path: bool,
    },
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = Preferences::load(args.prefs.as_deref());

    match args.subcommand {
        Subcommand::Show {
            paint,
            moves,
            solve,
        } => {
            let mut cube = Cube::new();
            paint.apply(&mut cube)?;
            if let Some(moves) = moves {
                // Unsupported moves have already been logged.
                if let Ok(n) = cube.apply_moves_str(&moves) {
                    log::info!("Applied {n} moves");
                }
            }
            if solve {
                cube.solve();
            }
            println!("{cube}");
            println!("solved: {}", cube.is_solved());
            Ok(())
        }

        Subcommand::Assemble {
            paint,
            replays,
            output,
            realtime,
        } => {
            let mut cube = Cube::new();
            paint.apply(&mut cube)?;

            let mut session = PaintSession::with_cube(cube, prefs.animation.clone());
            session.start_assembly()?;
            run_animation(&mut session, realtime);
            for i in 0..replays {
                log::info!("Replay {} of {replays}", i + 1);
                session.replay()?;
                run_animation(&mut session, realtime);
            }

            let path = output.unwrap_or_else(|| prefs.export.path());
            export_gif(
                session.frames(),
                &NetRenderer::from_prefs(&prefs),
                prefs.animation.tick_interval(),
                &path,
            )
            .wrap_err_with(|| format!("error saving animation to {}", path.display()))?;
            println!("{}", path.display());
            Ok(())
        }

        Subcommand::Prefs { path } => {
            if path {
                match args.prefs {
                    Some(p) => println!("{}", p.display()),
                    None => println!("{}", cubepaint_prefs::paths::prefs_file()?.display()),
                }
            } else {
                print!("{}", prefs.to_yaml()?);
            }
            Ok(())
        }
    }
}

/// Ticks the session until its assembly animation is over.
fn run_animation(session: &mut PaintSession, realtime: bool) {
    let interval = session.prefs().tick_interval();
    loop {
        match session.tick() {
            TickOutcome::Applied(_) => (),
            TickOutcome::Finished | TickOutcome::Idle => break,
        }
        if realtime {
            std::thread::sleep(interval);
        }
    }
}
