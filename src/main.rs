// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::{self, Read, Write};
use std::path::Path;
use std::process;
use std::str::FromStr;

use pico_args::Arguments;

use svgimage::{Color, Format, Image, Indent, Point, ResizeFilter, SaveOptions, SizeBox, WriteOptions};

const HELP: &str = "\
svgimage edits SVG images without rendering them.

USAGE:
  svgimage [OPTIONS] <in-svg> <out-svg>  # from file to file
  svgimage [OPTIONS] <in-svg> -c         # from file to stdout
  svgimage [OPTIONS] - <out-svg>         # from stdin to file
  svgimage [OPTIONS] - -c                # from stdin to stdout
  svgimage --size <in-svg>               # print the image size

OPTIONS:
  -h, --help                        Prints help information
  -V, --version                     Prints version information
  -c                                Prints the output SVG to the stdout

  --size                            Prints the resolved image size and exits
  --resize WxH                      Resizes the image to an absolute size
  --resize-ratio WxH                Resizes the image to an aspect ratio
  --crop X,Y,WxH                    Crops the image
                                    Example: '10,20,100x50'

  --gamma NUM                       Applies a gamma correction
                                    [possible values: a positive number]
  --negative                        Inverts the colors
  --grayscale                       Removes the colors
  --colorize COLOR                  Tints the image with an RGB color
                                    Examples: '#ff8000', 'red'
  --sharpen                         Sharpens the image
  --blur SIGMA                      Blurs the image
                                    [possible values: a positive number]
  --brightness NUM                  Changes the brightness
                                    [possible values: -100..100 (inclusive)]

  --strip                           Removes all comments
  --format FORMAT                   Sets the output format
                                    [default: output file extension or svg]
                                    [possible values: svg, svgz]
  --indent INDENT                   Sets the XML nodes indent
                                    [values: none, 0, 1, 2, 3, 4, tabs] [default: none]
  --attrs-indent INDENT             Sets the XML attributes indent
                                    [values: none, 0, 1, 2, 3, 4, tabs] [default: none]
  --quiet                           Disables warnings
  --verbose                         Enables debug output

Effects are applied in the order they are listed above.

ARGS:
  <in-svg>                          Input file
  <out-svg>                         Output file
";

#[derive(Debug)]
struct Args {
    size: bool,
    resize: Option<SizeBox>,
    resize_ratio: Option<SizeBox>,
    crop: Option<(Point, SizeBox)>,

    gamma: Option<f64>,
    negative: bool,
    grayscale: bool,
    colorize: Option<Color>,
    sharpen: bool,
    blur: Option<f64>,
    brightness: Option<i32>,

    strip: bool,
    format: Option<Format>,
    indent: Indent,
    attrs_indent: Indent,

    quiet: bool,
    verbose: bool,

    input: String,
    output: Option<String>,
}

fn collect_args() -> Result<Args, pico_args::Error> {
    let mut input = Arguments::from_env();

    if input.contains(["-h", "--help"]) {
        print!("{}", HELP);
        process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    Ok(Args {
        size: input.contains("--size"),
        resize: input.opt_value_from_fn("--resize", parse_absolute_size)?,
        resize_ratio: input.opt_value_from_fn("--resize-ratio", parse_aspect_ratio)?,
        crop: input.opt_value_from_fn("--crop", parse_crop)?,

        gamma: input.opt_value_from_fn("--gamma", parse_positive)?,
        negative: input.contains("--negative"),
        grayscale: input.contains("--grayscale"),
        colorize: input.opt_value_from_fn("--colorize", parse_color)?,
        sharpen: input.contains("--sharpen"),
        blur: input.opt_value_from_fn("--blur", parse_positive)?,
        brightness: input.opt_value_from_fn("--brightness", parse_brightness)?,

        strip: input.contains("--strip"),
        format: input.opt_value_from_str("--format")?,
        indent: input
            .opt_value_from_fn("--indent", parse_indent)?
            .unwrap_or(Indent::None),
        attrs_indent: input
            .opt_value_from_fn("--attrs-indent", parse_indent)?
            .unwrap_or(Indent::None),

        quiet: input.contains("--quiet"),
        verbose: input.contains("--verbose"),

        input: input.free_from_str()?,
        output: input.opt_free_from_str()?,
    })
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s.split_once('x').ok_or("size must be in a WxH format")?;
    let w: u32 = w.trim().parse().map_err(|_| "invalid width")?;
    let h: u32 = h.trim().parse().map_err(|_| "invalid height")?;
    Ok((w, h))
}

fn parse_absolute_size(s: &str) -> Result<SizeBox, String> {
    let (w, h) = parse_size(s)?;
    SizeBox::new(w, h).map_err(|e| e.to_string())
}

fn parse_aspect_ratio(s: &str) -> Result<SizeBox, String> {
    let (w, h) = parse_size(s)?;
    SizeBox::aspect_ratio(w, h).map_err(|e| e.to_string())
}

fn parse_crop(s: &str) -> Result<(Point, SizeBox), String> {
    let mut parts = s.splitn(3, ',');
    let (x, y, size) = match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), Some(size)) => (x, y, size),
        _ => return Err("crop must be in a X,Y,WxH format".to_string()),
    };

    let x: i32 = x.trim().parse().map_err(|_| "invalid crop X")?;
    let y: i32 = y.trim().parse().map_err(|_| "invalid crop Y")?;
    Ok((Point::new(x, y), parse_absolute_size(size)?))
}

fn parse_positive(s: &str) -> Result<f64, String> {
    let n: f64 = s.parse().map_err(|_| "invalid number")?;

    if n.is_finite() && n > 0.0 {
        Ok(n)
    } else {
        Err("NUM must be positive".to_string())
    }
}

fn parse_brightness(s: &str) -> Result<i32, String> {
    let n: i32 = s.parse().map_err(|_| "invalid number")?;

    if (-100..=100).contains(&n) {
        Ok(n)
    } else {
        Err("brightness out of bounds".to_string())
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    svgtypes::Color::from_str(s)
        .map(Color::from)
        .map_err(|_| "invalid color".to_string())
}

fn parse_indent(s: &str) -> Result<Indent, String> {
    let indent = match s {
        "none" => Indent::None,
        "0" => Indent::Spaces(0),
        "1" => Indent::Spaces(1),
        "2" => Indent::Spaces(2),
        "3" => Indent::Spaces(3),
        "4" => Indent::Spaces(4),
        "tabs" => Indent::Tabs,
        _ => return Err("invalid INDENT value".to_string()),
    };

    Ok(indent)
}

#[derive(Clone, PartialEq, Debug)]
enum InputFrom<'a> {
    Stdin,
    File(&'a str),
}

#[derive(Clone, PartialEq, Debug)]
enum OutputTo<'a> {
    Stdout,
    File(&'a str),
}

fn main() {
    let args = match collect_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            let level = if args.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Warn
            };

            log::set_max_level(level);
        }
    }

    if let Err(e) = process(args) {
        eprintln!("Error: {}.", e);
        process::exit(1);
    }
}

fn process(args: Args) -> Result<(), String> {
    let in_svg = match args.input.as_str() {
        "-" => InputFrom::Stdin,
        "-c" => return Err("-c should be set after input".to_string()),
        path => InputFrom::File(path),
    };

    let input_svg = match in_svg {
        InputFrom::Stdin => load_stdin(),
        InputFrom::File(path) => std::fs::read(path).map_err(|e| e.to_string()),
    }?;

    let mut image = Image::from_data(&input_svg).map_err(|e| e.to_string())?;

    if args.size {
        println!("{}", image.size());
        return Ok(());
    }

    let out_svg = match args.output.as_deref() {
        Some("-c") => OutputTo::Stdout,
        Some(path) => OutputTo::File(path),
        None => return Err("<out-svg> is not set".to_string()),
    };

    edit(&mut image, &args).map_err(|e| e.to_string())?;

    let opt = SaveOptions {
        format: args.format,
        write: WriteOptions {
            indent: args.indent,
            attributes_indent: args.attrs_indent,
            ..WriteOptions::default()
        },
    };

    match out_svg {
        OutputTo::Stdout => {
            let data = image
                .get(opt.format.unwrap_or_default(), &opt.write)
                .map_err(|e| e.to_string())?;
            io::stdout()
                .write_all(&data)
                .map_err(|_| "failed to write to the stdout".to_string())?;
        }
        OutputTo::File(path) => {
            image
                .save(Some(Path::new(path)), &opt)
                .map_err(|e| format!("failed to write the output file cause {}", e))?;
        }
    }

    Ok(())
}

fn edit(image: &mut Image, args: &Args) -> Result<(), svgimage::Error> {
    if let Some(size) = args.resize {
        image.resize(size, ResizeFilter::Undefined)?;
    }

    if let Some(size) = args.resize_ratio {
        image.resize(size, ResizeFilter::Undefined)?;
    }

    if let Some((start, size)) = args.crop {
        image.crop(start, size)?;
    }

    let mut effects = image.effects();
    if let Some(correction) = args.gamma {
        effects.gamma(correction)?;
    }

    if args.negative {
        effects.negative()?;
    }

    if args.grayscale {
        effects.grayscale()?;
    }

    if let Some(color) = args.colorize {
        effects.colorize(color)?;
    }

    if args.sharpen {
        effects.sharpen()?;
    }

    if let Some(sigma) = args.blur {
        effects.blur(sigma)?;
    }

    if let Some(amount) = args.brightness {
        effects.brightness(amount)?;
    }

    if args.strip {
        image.strip();
    }

    Ok(())
}

fn load_stdin() -> Result<Vec<u8>, String> {
    let mut buf = Vec::new();
    let stdin = io::stdin();
    let mut handle = stdin.lock();

    handle
        .read_to_end(&mut buf)
        .map_err(|_| "failed to read from stdin".to_string())?;

    Ok(buf)
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
