use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use glam::DVec3;

//
// ──────────────────────────────────────────────────────────────
//   Point-file ingestion
//
//   Text files of comma-separated `x,y,z` triples, one point per
//   line. A blank line ends the current polyline and starts the
//   next; empty polylines are dropped, so every group that comes
//   out of here can become a drawable.
// ──────────────────────────────────────────────────────────────
//

pub fn load_polylines(path: &Path) -> Result<Vec<Vec<DVec3>>>
{
  let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

  read_polylines(BufReader::new(file))
    .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn read_polylines<R: BufRead>(reader: R) -> Result<Vec<Vec<DVec3>>>
{
  let mut polylines = Vec::new();
  let mut current = Vec::new();

  for (index, line) in reader.lines().enumerate()
  {
    let line = line.context("failed to read point data")?;

    if line.trim().is_empty()
    {
      flush_polyline(&mut polylines, &mut current);
    }
    else
    {
      let point = parse_point(&line).with_context(|| format!("line {}", index + 1))?;
      current.push(point);
    }
  }

  // The last group usually has no trailing blank line.
  flush_polyline(&mut polylines, &mut current);

  Ok(polylines)
}

fn flush_polyline(polylines: &mut Vec<Vec<DVec3>>, current: &mut Vec<DVec3>)
{
  if !current.is_empty()
  {
    polylines.push(std::mem::take(current));
  }
}

fn parse_point(line: &str) -> Result<DVec3>
{
  let mut parts = line.split(',');
  let mut next = || -> Result<f64> {
    let part = parts.next().context("expected `x,y,z`")?.trim();
    part.parse::<f64>().with_context(|| format!("bad coordinate `{part}`"))
  };

  Ok(DVec3::new(next()?, next()?, next()?))
}
