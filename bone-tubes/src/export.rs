//! OBJ export for inspecting generated meshes
//!
//! Writes positions, UVs, normals and quad faces. Skinning data has no OBJ
//! representation; bone names are listed as comments.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::types::MeshBuffers;

/// Write `mesh` to an OBJ file at `path`
pub fn write_obj(mesh: &MeshBuffers, path: &Path, name: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj_to(mesh, &mut writer, name)?;
    writer.flush()
}

/// Write `mesh` as OBJ text to any writer
pub fn write_obj_to<W: Write>(mesh: &MeshBuffers, w: &mut W, name: &str) -> std::io::Result<()> {
    writeln!(w, "# {} vertices, {} quads", mesh.vertex_count(), mesh.quad_count())?;
    for (index, bone) in mesh.bones.iter().enumerate() {
        writeln!(w, "# bone {} {}", index, bone.name)?;
    }
    writeln!(w, "o {}", name)?;

    for p in &mesh.positions {
        writeln!(w, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for uv in &mesh.uvs {
        writeln!(w, "vt {} {}", uv[0], uv[1])?;
    }
    for n in &mesh.normals {
        writeln!(w, "vn {} {} {}", n[0], n[1], n[2])?;
    }

    // OBJ indices are 1-based; every stream shares the vertex index
    for quad in mesh.indices.chunks_exact(4) {
        write!(w, "f")?;
        for &i in quad {
            let i = i + 1;
            write!(w, " {i}/{i}/{i}")?;
        }
        writeln!(w)?;
    }

    Ok(())
}
