//! Paced terminal reveal of a drawn winner: a countdown, a banner, then a ticker-tape celebration.

use std::io;
use std::io::Write;
use std::thread;
use std::time::Duration;

use tinyrand::Rand;

use crate::display::pretty_name;

const PALETTE: [(u8, u8, u8); 10] = [
    (0xE9, 0x1E, 0x63),
    (0x9C, 0x27, 0xB0),
    (0x3F, 0x51, 0xB5),
    (0x21, 0x96, 0xF3),
    (0x00, 0xBC, 0xD4),
    (0x4C, 0xAF, 0x50),
    (0x8B, 0xC3, 0x4A),
    (0xFF, 0xC1, 0x07),
    (0xFF, 0x98, 0x00),
    (0xFF, 0x57, 0x22),
];

const STREAMERS: [char; 5] = ['▌', '▍', '▎', '╱', '╲'];

#[derive(Debug, Clone)]
pub struct TickerTape {
    pub density: usize,
    pub width: usize,
    pub frames: usize,
    pub duration: Duration,
}
impl Default for TickerTape {
    fn default() -> Self {
        Self {
            density: 220,
            width: 72,
            frames: 20,
            duration: Duration::from_secs(5),
        }
    }
}
impl TickerTape {
    pub fn with_density(mut self, density: usize) -> Self {
        self.density = density;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Streamers per frame and the pause after each frame. `frames` must be non-zero.
    fn pacing(&self) -> (usize, Duration) {
        (
            self.density.div_ceil(self.frames),
            self.duration.div_f64(self.frames as f64),
        )
    }

    /// Rains `density` coloured streamers over `frames` lines, spread evenly across `duration`.
    pub fn rain(&self, out: &mut impl Write, rand: &mut impl Rand) -> io::Result<()> {
        if self.width == 0 || self.frames == 0 {
            return Ok(());
        }
        let (per_frame, pause) = self.pacing();
        let mut remaining = self.density;
        for _ in 0..self.frames {
            let mut line = vec![None; self.width];
            for _ in 0..usize::min(per_frame, remaining) {
                let col = next_index(rand, self.width);
                let colour = PALETTE[next_index(rand, PALETTE.len())];
                let streamer = STREAMERS[next_index(rand, STREAMERS.len())];
                line[col] = Some((colour, streamer));
            }
            remaining = remaining.saturating_sub(per_frame);

            for cell in line {
                match cell {
                    None => write!(out, " ")?,
                    Some(((r, g, b), streamer)) => {
                        write!(out, "\x1b[38;2;{r};{g};{b}m{streamer}\x1b[0m")?
                    }
                }
            }
            writeln!(out)?;
            out.flush()?;
            pause_for(pause);
        }
        Ok(())
    }
}

#[inline]
fn next_index(rand: &mut impl Rand, len: usize) -> usize {
    rand.next_lim_u64(len as u64) as usize
}

fn pause_for(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}

#[derive(Debug, Clone)]
pub struct Reveal {
    pub headline: String,
    pub title: String,
    pub countdown: u32,
    pub tick: Duration,
    pub celebration: Option<TickerTape>,
}
impl Default for Reveal {
    fn default() -> Self {
        Self {
            headline: "And the Smackoff 30 Winner is ...".into(),
            title: "💰 Smackoff Winner ⌚".into(),
            countdown: 3,
            tick: Duration::from_secs(1),
            celebration: Some(TickerTape::default()),
        }
    }
}
impl Reveal {
    pub fn with_countdown(mut self, countdown: u32) -> Self {
        self.countdown = countdown;
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_celebration(mut self, celebration: Option<TickerTape>) -> Self {
        self.celebration = celebration;
        self
    }

    pub fn run(&self, winner: &str, out: &mut impl Write, rand: &mut impl Rand) -> io::Result<()> {
        writeln!(out, "{}", self.headline)?;
        for remaining in (1..=self.countdown).rev() {
            writeln!(out, "{remaining:>8}")?;
            out.flush()?;
            pause_for(self.tick);
        }

        writeln!(out)?;
        writeln!(out, "{}", self.title)?;
        writeln!(out)?;
        writeln!(out, "    {}", pretty_name(winner))?;
        writeln!(out)?;
        out.flush()?;

        if let Some(celebration) = &self.celebration {
            celebration.rain(out, rand)?;
            writeln!(out, "🎉 Winner revealed!")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyrand::StdRand;

    fn instant() -> Reveal {
        Reveal::default().with_tick(Duration::ZERO)
    }

    #[test]
    fn reveal_sequence() {
        let mut out = vec![];
        instant()
            .with_celebration(None)
            .run("Brad_in_Corona", &mut out, &mut StdRand::default())
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
        assert_eq!(
            vec![
                "And the Smackoff 30 Winner is ...",
                "3",
                "2",
                "1",
                "💰 Smackoff Winner ⌚",
                "Brad in Corona"
            ],
            lines
        );
    }

    #[test]
    fn reveal_with_celebration() {
        let mut out = vec![];
        let celebration = TickerTape::default().with_duration(Duration::ZERO);
        instant()
            .with_countdown(1)
            .with_celebration(Some(celebration.clone()))
            .run("Iafrate", &mut out, &mut StdRand::default())
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.trim_end().ends_with("🎉 Winner revealed!"));
        assert!(out.find("Iafrate").unwrap() < out.find('\x1b').unwrap());
    }

    #[test]
    fn rain_draws_frames() {
        let mut out = vec![];
        let tape = TickerTape {
            density: 10,
            width: 8,
            frames: 4,
            duration: Duration::ZERO,
        };
        tape.rain(&mut out, &mut StdRand::default()).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(4, out.lines().count());
        let streamers = out.matches("\x1b[0m").count();
        assert!(streamers > 0 && streamers <= 10, "streamers: {streamers}");
    }

    #[test]
    fn pacing() {
        let tape = TickerTape::default();
        assert_eq!((11, Duration::from_millis(250)), tape.pacing());

        let tape = TickerTape {
            density: usize::MAX,
            frames: 1 << 32,
            ..TickerTape::default()
        };
        let (per_frame, pause) = tape.pacing();
        assert_eq!(usize::MAX.div_ceil(1 << 32), per_frame);
        assert!(pause < Duration::from_micros(2), "pause: {pause:?}");
    }

    #[test]
    fn rain_degenerate() {
        let mut out = vec![];
        let tape = TickerTape {
            width: 0,
            ..TickerTape::default()
        };
        tape.rain(&mut out, &mut StdRand::default()).unwrap();
        assert!(out.is_empty());
    }
}
