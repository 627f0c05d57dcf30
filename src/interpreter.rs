//! Line-by-line interpreter for the scene description language.
//!
//! Each non-blank line is split on whitespace and the first token is looked
//! up in a [`CommandTable`]. Handlers read their positional arguments through
//! an [`ArgReader`] and either touch the [`Scene`] directly or work on the
//! transform/material [`StateStacks`].

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::{debug, info, warn};

use crate::error::{Result, SceneError};
use crate::geometry::{rotate, scale, translate, Fp, Point3f, Vec3f};
use crate::scene::{Light, Material, Scene, SceneObject, Sphere};
use crate::stacks::StateStacks;

pub type Handler = fn(&mut Interpreter, &mut ArgReader) -> Result<()>;

#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    /// Treat groups still open at end of input as an error instead of a warning.
    pub strict_groups: bool,
}

/// Positional argument cursor over the tokens following a command.
pub struct ArgReader<'a> {
    line: usize,
    command: &'a str,
    tokens: &'a [&'a str],
    position: usize,
}

impl<'a> ArgReader<'a> {
    pub fn new(line: usize, command: &'a str, tokens: &'a [&'a str]) -> Self {
        ArgReader {
            line,
            command,
            tokens,
            position: 0,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    fn next_token(&mut self) -> Result<&'a str> {
        let token = self
            .tokens
            .get(self.position)
            .copied()
            .ok_or_else(|| SceneError::MissingArgument {
                line: self.line,
                command: self.command.to_string(),
                position: self.position + 1,
            })?;
        self.position += 1;
        Ok(token)
    }

    pub fn number<T: FromStr>(&mut self) -> Result<T> {
        let token = self.next_token()?;
        token.parse().map_err(|_| SceneError::InvalidNumber {
            line: self.line,
            command: self.command.to_string(),
            token: token.to_string(),
        })
    }

    pub fn float(&mut self) -> Result<Fp> {
        self.number()
    }

    fn floats<const N: usize>(&mut self) -> Result<[Fp; N]> {
        let mut values = [0.0; N];
        for value in values.iter_mut() {
            *value = self.float()?;
        }
        Ok(values)
    }

    pub fn vector(&mut self) -> Result<Vec3f> {
        let [x, y, z] = self.floats::<3>()?;
        Ok(Vec3f::new(x, y, z))
    }

    pub fn point(&mut self) -> Result<Point3f> {
        Ok(Point3f::from(self.vector()?))
    }
}

/// Maps command names to their handlers.
#[derive(Clone)]
pub struct CommandTable {
    handlers: HashMap<&'static str, Handler>,
}

impl Default for CommandTable {
    fn default() -> Self {
        let mut table = CommandTable {
            handlers: HashMap::new(),
        };
        table.register("view", view);
        table.register("background", background);
        table.register("ambient", ambient);
        table.register("light", light);
        table.register("group", group);
        table.register("groupend", group_end);
        table.register("sphere", sphere);
        table.register("material", material);
        table.register("refraction", refraction);
        table.register("move", move_by);
        table.register("scale", scale_by);
        table.register("rotate", rotate_by);
        table.register("texture", texture);
        table
    }
}

impl CommandTable {
    /// Adds or replaces a command.
    pub fn register(&mut self, name: &'static str, handler: Handler) {
        self.handlers.insert(name, handler);
    }

    pub fn get(&self, name: &str) -> Option<Handler> {
        self.handlers.get(name).copied()
    }
}

pub struct Interpreter {
    scene: Scene,
    stacks: StateStacks,
    commands: CommandTable,
    options: ParseOptions,
}

impl Interpreter {
    pub fn new(options: ParseOptions) -> Self {
        Interpreter::with_commands(CommandTable::default(), options)
    }

    pub fn with_commands(commands: CommandTable, options: ParseOptions) -> Self {
        Interpreter {
            scene: Scene::default(),
            stacks: StateStacks::default(),
            commands,
            options,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn stacks(&self) -> &StateStacks {
        &self.stacks
    }

    /// Runs one physical line. `line_number` is 1-based and only used for
    /// diagnostics.
    pub fn interpret_line(&mut self, line_number: usize, line: &str) -> Result<()> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = tokens.split_first() else {
            return Ok(());
        };
        if command.starts_with('#') {
            return Ok(());
        }
        debug!("Parsing line {}: '{}'", line_number, line.trim());

        match self.commands.get(command) {
            Some(handler) => {
                let mut reader = ArgReader::new(line_number, command, args);
                handler(self, &mut reader)
            }
            None => {
                warn!(
                    "Undefined scene file item on line {}: {}",
                    line_number, command
                );
                Ok(())
            }
        }
    }

    /// Closes the pass and hands the scene over.
    pub fn finish(self) -> Result<Scene> {
        let open = self.stacks.open_scopes();
        if open > 0 {
            if self.options.strict_groups {
                return Err(SceneError::UnclosedGroups { open });
            }
            warn!("{} group(s) left open at end of scene file", open);
        }
        info!(
            "Parsed scene: {}x{}, {} light(s), {} object(s)",
            self.scene.width(),
            self.scene.height(),
            self.scene.lights.len(),
            self.scene.objects.len()
        );
        Ok(self.scene)
    }

    /// Folds every line into the scene, stopping at the first error.
    pub fn run<L: AsRef<str>>(
        mut self,
        lines: impl IntoIterator<Item = Result<L>>,
    ) -> Result<Scene> {
        for (index, line) in lines.into_iter().enumerate() {
            self.interpret_line(index + 1, line?.as_ref())?;
        }
        self.finish()
    }
}

pub fn parse_scene_str(content: &str, options: ParseOptions) -> Result<Scene> {
    Interpreter::new(options).run(content.lines().map(Ok::<_, SceneError>))
}

pub fn parse_scene_file(path: impl AsRef<Path>, options: ParseOptions) -> Result<Scene> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| SceneError::Io {
        path: path.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(io_error)?);
    Interpreter::new(options).run(reader.lines().map(|line| line.map_err(io_error)))
}

fn view(interpreter: &mut Interpreter, args: &mut ArgReader) -> Result<()> {
    interpreter.scene.image_size = args.number()?;
    interpreter.scene.corner_dist = args.float()?;
    Ok(())
}

fn background(interpreter: &mut Interpreter, args: &mut ArgReader) -> Result<()> {
    interpreter.scene.bg_color = args.vector()?;
    Ok(())
}

fn ambient(interpreter: &mut Interpreter, args: &mut ArgReader) -> Result<()> {
    interpreter.scene.ambient_light = args.vector()?;
    Ok(())
}

fn light(interpreter: &mut Interpreter, args: &mut ArgReader) -> Result<()> {
    let color = args.vector()?;
    let position = args.point()?;
    interpreter.scene.lights.push(Light { position, color });
    Ok(())
}

fn group(interpreter: &mut Interpreter, _: &mut ArgReader) -> Result<()> {
    interpreter.stacks.push_scope();
    Ok(())
}

fn group_end(interpreter: &mut Interpreter, args: &mut ArgReader) -> Result<()> {
    interpreter
        .stacks
        .pop_scope()
        .map(|_| ())
        .ok_or(SceneError::StackUnderflow { line: args.line() })
}

fn sphere(interpreter: &mut Interpreter, _: &mut ArgReader) -> Result<()> {
    let sphere = Sphere {
        transform: *interpreter.stacks.top_transform(),
        material: interpreter.stacks.top_material().clone(),
    };
    interpreter.scene.objects.push(SceneObject::Sphere(sphere));
    Ok(())
}

fn material(interpreter: &mut Interpreter, args: &mut ArgReader) -> Result<()> {
    let diffuse = args.vector()?;
    let specular = args.vector()?;
    let shininess = args.float()?;
    interpreter
        .stacks
        .replace_material(Material::new(diffuse, specular, shininess));
    Ok(())
}

fn refraction(interpreter: &mut Interpreter, args: &mut ArgReader) -> Result<()> {
    let color = args.vector()?;
    let index = args.float()?;
    interpreter
        .stacks
        .top_material_mut()
        .set_refraction(color, index);
    Ok(())
}

fn move_by(interpreter: &mut Interpreter, args: &mut ArgReader) -> Result<()> {
    let offset = args.vector()?;
    let moved = translate(interpreter.stacks.top_transform(), &offset);
    interpreter.stacks.replace_transform(moved);
    Ok(())
}

fn scale_by(interpreter: &mut Interpreter, args: &mut ArgReader) -> Result<()> {
    let factors = args.vector()?;
    let scaled = scale(interpreter.stacks.top_transform(), &factors);
    interpreter.stacks.replace_transform(scaled);
    Ok(())
}

fn rotate_by(interpreter: &mut Interpreter, args: &mut ArgReader) -> Result<()> {
    let angle: Fp = args.float()?;
    let axis = args.vector()?;
    let rotated = rotate(interpreter.stacks.top_transform(), angle.to_radians(), &axis)
        .ok_or(SceneError::DegenerateAxis { line: args.line() })?;
    interpreter.stacks.replace_transform(rotated);
    Ok(())
}

// Textures are not supported yet; arguments are accepted and dropped.
fn texture(_: &mut Interpreter, _: &mut ArgReader) -> Result<()> {
    Ok(())
}
