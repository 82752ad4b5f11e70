// Prints what the bindings would hand to D3DX for a font and a mesh
// vertex layout. Runs on every platform; no device is created.

use d3dx::{color, sys, DeclType, DeclUsage, FontDescription, VertexDeclaration};

fn main() {
    env_logger::init();

    println!("d3dx describe example\n---------------------");
    let font = match FontDescription::builder()
        .height(-16)
        .weight(sys::FW_BOLD)
        .quality(sys::CLEARTYPE_QUALITY)
        .face_name("Consolas")
        .build()
    {
        Ok(font) => font,
        Err(e) => {
            eprintln!("Invalid font description: {}", e);
            std::process::exit(1);
        }
    };
    let raw = font.to_raw();
    println!("Font {:?}:", font.face_name);
    println!("  height {}, weight {}, italic {}", raw.Height, raw.Weight, raw.Italic);
    println!("  face name bytes {:?}", raw.face_name());

    let declaration = VertexDeclaration::new()
        .element(DeclType::Float3, DeclUsage::Position, 0)
        .element(DeclType::Float3, DeclUsage::Normal, 0)
        .element(DeclType::Color, DeclUsage::Color, 0)
        .element(DeclType::Float2, DeclUsage::TexCoord, 0);
    let elements = match declaration.build() {
        Ok(elements) => elements,
        Err(e) => {
            eprintln!("Invalid vertex declaration: {}", e);
            std::process::exit(1);
        }
    };
    println!("\nVertex declaration ({} bytes per vertex):", declaration.stride());
    for element in elements {
        println!(
            "  - stream {:#04x} offset {:2} type {:2} usage {:2}/{}",
            element.Stream, element.Offset, element.Type, element.Usage, element.UsageIndex
        );
    }

    println!("\nText color: {:#010x}", color::to_d3dcolor(&color::YELLOW));
}
