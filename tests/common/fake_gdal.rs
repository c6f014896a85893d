//! Fake GDAL executables.
//!
//! Each script appends its command line to `$FAKE_GDAL_LOG` and honours a
//! `FAKE_<TOOL>_FAIL` variable that makes it print a GDAL-style error and
//! exit 1. Only shell builtins and absolute-path utilities are used, because
//! the test `PATH` contains nothing but these scripts.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

pub const GDALWARP: &str = r#"#!/bin/sh
echo "gdalwarp $*" >> "$FAKE_GDAL_LOG"
if [ -n "$FAKE_GDALWARP_FAIL" ]; then
  echo "ERROR 1: fake warp failure" >&2
  exit 1
fi
for last; do :; done
case " $* " in
  *" -overwrite "*) ;;
  *)
    if [ -e "$last" ]; then
      echo "ERROR 1: Output dataset $last exists, but some command line options were provided indicating a new dataset should be created.  Please delete existing dataset and run again." >&2
      exit 1
    fi
    ;;
esac
printf 'II*\000' > "$last"
"#;

pub const GDALADDO: &str = r#"#!/bin/sh
echo "gdaladdo $*" >> "$FAKE_GDAL_LOG"
if [ -n "$FAKE_GDALADDO_FAIL" ]; then
  echo "ERROR 1: fake overview failure" >&2
  exit 1
fi
"#;

/// Writes a full quad-tree for every requested zoom, like gdal2tiles does
/// for a world-covering raster.
pub const GDAL2TILES: &str = r#"#!/bin/sh
echo "gdal2tiles.py $*" >> "$FAKE_GDAL_LOG"
if [ -n "$FAKE_GDAL2TILES_FAIL" ]; then
  echo "ERROR 1: fake tiler failure" >&2
  exit 1
fi
zoom=""
driver=""
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    -z) zoom="$2"; shift 2 ;;
    -w) shift 2 ;;
    --tiledriver) driver="$2"; shift 2 ;;
    --config) shift 3 ;;
    -*) shift ;;
    *) out="$1"; shift ;;
  esac
done
min="${zoom%-*}"
max="${zoom#*-}"
case "$driver" in
  PNG) ext=png ;;
  *) ext=jpg ;;
esac
z="$min"
while [ "$z" -le "$max" ]; do
  n=$((1 << z))
  x=0
  while [ "$x" -lt "$n" ]; do
    /bin/mkdir -p "$out/$z/$x"
    y=0
    while [ "$y" -lt "$n" ]; do
      if [ "$ext" = png ]; then
        printf '\211PNG\r\n\032\n\000\000\000\rIHDR' > "$out/$z/$x/$y.$ext"
      else
        printf '\377\330\377\340\000\020JFIF\000' > "$out/$z/$x/$y.$ext"
      fi
      y=$((y + 1))
    done
    x=$((x + 1))
  done
  z=$((z + 1))
done
"#;

/// Install a script as an executable named `name` in `dir`
pub fn install(dir: &Path, name: &str, script: &str) {
    let path = dir.join(name);
    fs::write(&path, script).expect("Failed to write fake tool");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake tool executable");
}

