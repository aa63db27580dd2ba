// args.rs - Command line flags for burst-render

use std::path::PathBuf;

use clap::Parser;

/// A click replayed at the start of `frame`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptedClick {
    pub x: f64,
    pub y: f64,
    pub frame: u32,
}

#[derive(Parser, Debug)]
#[command(name = "burst-render")]
#[command(about = "Render click-spawned particle bursts to PNG frames")]
pub struct Options {
    /// Surface width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 360)]
    pub height: u32,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 240)]
    pub frames: u32,

    /// Write every Nth frame
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub every: u32,

    /// Click as X,Y or X,Y@FRAME; repeatable. Defaults to the centre on frame 0
    #[arg(long = "click", value_parser = parse_click)]
    pub clicks: Vec<ScriptedClick>,

    /// Random seed
    #[arg(long, default_value_t = 0xDEADBEEF)]
    pub seed: u32,

    /// Output directory
    #[arg(long, default_value = "frames")]
    pub out: PathBuf,
}

impl Options {
    /// Scripted clicks, or one click at the centre when none were given
    pub fn scripted_clicks(&self) -> Vec<ScriptedClick> {
        if !self.clicks.is_empty() {
            return self.clicks.clone();
        }
        vec![ScriptedClick {
            x: self.width as f64 / 2.0,
            y: self.height as f64 / 2.0,
            frame: 0,
        }]
    }
}

/// `X,Y` or `X,Y@FRAME`
fn parse_click(v: &str) -> Result<ScriptedClick, String> {
    let bad = || format!("expected X,Y or X,Y@FRAME, got '{v}'");

    let (point, frame) = match v.split_once('@') {
        Some((p, f)) => (p, f.trim().parse().map_err(|_| bad())?),
        None => (v, 0),
    };
    let (x, y) = point.split_once(',').ok_or_else(bad)?;
    Ok(ScriptedClick {
        x: x.trim().parse().map_err(|_| bad())?,
        y: y.trim().parse().map_err(|_| bad())?,
        frame,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(s: &str) -> Result<Options, clap::Error> {
        Options::try_parse_from(std::iter::once("burst-render").chain(s.split_whitespace()))
    }

    #[test]
    fn defaults_click_once_at_center() {
        let opts = parse("").unwrap();
        assert_eq!(opts.scripted_clicks(), vec![ScriptedClick { x: 320.0, y: 180.0, frame: 0 }]);
        assert_eq!(opts.frames, 240);
        assert_eq!(opts.every, 10);
    }

    #[test]
    fn parses_flags_and_scripted_clicks() {
        let opts = parse(
            "--width 200 --height 100 --frames 30 --every 2 --click 10,20 --click 5.5,6@12 --out /tmp/x",
        )
        .unwrap();
        assert_eq!(opts.width, 200);
        assert_eq!(opts.height, 100);
        assert_eq!(opts.frames, 30);
        assert_eq!(opts.every, 2);
        assert_eq!(
            opts.scripted_clicks(),
            vec![
                ScriptedClick { x: 10.0, y: 20.0, frame: 0 },
                ScriptedClick { x: 5.5, y: 6.0, frame: 12 },
            ]
        );
        assert_eq!(opts.out, PathBuf::from("/tmp/x"));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse("--frames").is_err());
        assert!(parse("--frames abc").is_err());
        assert!(parse("--every 0").is_err());
        assert!(parse("--click 10").is_err());
        assert!(parse("--click 1,2@x").is_err());
        assert!(parse("--bogus 1").is_err());
    }
}
