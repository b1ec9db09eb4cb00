/// Reader for line-oriented text geometry (`v` / `f` records)
use std::fs;
use std::path::Path;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till},
    character::complete::{char, digit1, multispace0, space1},
    combinator::{eof, map_res, opt},
    multi::many1,
    number::complete::float,
    sequence::{pair, preceded, terminated},
    IResult,
};

use crate::error::GeometryError;
use crate::geometry::{Mesh, Triangle, Vec3};

/// Result of reading a geometry source: the mesh built from every valid
/// line plus a diagnostic for every line that was skipped.
#[derive(Debug, Default)]
pub struct ParsedGeometry {
    pub mesh: Mesh,
    pub diagnostics: Vec<GeometryError>,
}

/// Parse geometry text. Never fails; bad lines become diagnostics.
///
/// Faces are resolved after all vertices are read. Faces with more than
/// three indices are split into a fan around the first vertex.
pub fn parse_obj(input: &str) -> ParsedGeometry {
    let mut vertices: Vec<Vec3> = Vec::new();
    let mut faces: Vec<(usize, Vec<usize>)> = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let Some(first) = line.chars().next() else {
            continue;
        };

        match first {
            '#' | 'g' => {}
            c if c.is_whitespace() => {}
            // vn / vt / vp records carry nothing we draw
            'v' if skipped_record(line).is_ok() => {}
            'v' => match vertex_line(line) {
                Ok((_, vertex)) => vertices.push(vertex),
                Err(_) => diagnostics.push(GeometryError::Malformed {
                    line: line_no,
                    kind: "vertex",
                }),
            },
            'f' => match face_line(line) {
                Ok((_, indices)) if indices.len() >= 3 => faces.push((line_no, indices)),
                _ => diagnostics.push(GeometryError::Malformed {
                    line: line_no,
                    kind: "face",
                }),
            },
            symbol => diagnostics.push(GeometryError::UnknownSymbol {
                line: line_no,
                symbol,
            }),
        }
    }

    let mut triangles = Vec::with_capacity(faces.len());
    for (line, indices) in faces {
        if let Some(&index) = indices.iter().find(|&&i| i == 0 || i > vertices.len()) {
            diagnostics.push(GeometryError::IndexOutOfRange {
                line,
                index,
                count: vertices.len(),
            });
            continue;
        }

        let v = |i: usize| vertices[i - 1];
        for pair in indices[1..].windows(2) {
            triangles.push(Triangle::new(v(indices[0]), v(pair[0]), v(pair[1])));
        }
    }

    // Diagnostics come out in line order even though faces resolve late.
    diagnostics.sort_by_key(|d| d.line());
    for diagnostic in &diagnostics {
        log::warn!("{diagnostic}");
    }

    ParsedGeometry {
        mesh: Mesh::from_triangles(triangles),
        diagnostics,
    }
}

/// Read and parse a geometry file.
pub fn read_obj(path: impl AsRef<Path>) -> Result<ParsedGeometry, GeometryError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| GeometryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = parse_obj(&text);
    log::info!(
        "loaded {} triangles from {} ({} diagnostics)",
        parsed.mesh.len(),
        path.display(),
        parsed.diagnostics.len()
    );
    Ok(parsed)
}

/// Load a mesh, falling back to an empty one if the file can't be read.
pub fn load_mesh(path: impl AsRef<Path>) -> Mesh {
    match read_obj(path) {
        Ok(parsed) => parsed.mesh,
        Err(e) => {
            log::error!("{e}; continuing with an empty mesh");
            Mesh::new()
        }
    }
}

fn skipped_record(input: &str) -> IResult<&str, &str> {
    terminated(alt((tag("vn"), tag("vt"), tag("vp"))), alt((space1, eof)))(input)
}

/// Nothing but whitespace (including a stray `\r`) may follow a record.
fn line_end(input: &str) -> IResult<&str, ()> {
    let (input, _) = pair(multispace0, eof)(input)?;
    Ok((input, ()))
}

fn vertex_line(input: &str) -> IResult<&str, Vec3> {
    let (input, _) = tag("v")(input)?;
    let (input, x) = preceded(space1, float)(input)?;
    let (input, y) = preceded(space1, float)(input)?;
    let (input, z) = preceded(space1, float)(input)?;
    // optional w, ignored
    let (input, _) = opt(preceded(space1, float))(input)?;
    let (input, _) = line_end(input)?;
    Ok((input, Vec3::new(x, y, z)))
}

fn face_line(input: &str) -> IResult<&str, Vec<usize>> {
    let (input, _) = tag("f")(input)?;
    terminated(many1(face_index), line_end)(input)
}

/// One face slot: `i`, `i/t`, `i/t/n` or `i//n`. Only `i` is kept.
fn face_index(input: &str) -> IResult<&str, usize> {
    let (input, index) = preceded(space1, map_res(digit1, str::parse::<usize>))(input)?;
    let (input, _) = opt(preceded(char('/'), take_till(|c: char| c.is_whitespace())))(input)?;
    Ok((input, index))
}
