mod menu;

use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use brushwork_engine::config::{self, DrawConfig};
use brushwork_engine::logging::{LoggingConfig, init_logging};
use brushwork_engine::scene::{DrawCmd, DrawList};
use brushwork_engine::text::DEFAULT_FAMILY;
use brushwork_gdi::prelude::*;

const MENU: WidgetId = WidgetId(1);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    config::install(DrawConfig::from_env());

    // Optional: `brushwork-studio path/to/font.ttf` for exact text metrics.
    let mut fonts = FontRegistry::new();
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        let bytes = std::fs::read(&path).with_context(|| format!("reading font {}", path.display()))?;
        fonts
            .load_font(DEFAULT_FAMILY, &bytes)
            .with_context(|| format!("parsing font {}", path.display()))?;
    }
    let fonts = Rc::new(fonts);

    let mut textures = TextureStore::new();
    let assets = DefaultAssets::create(&mut textures);
    let check_mark = textures
        .load_from_memory(CHECK_MARK_BMP)
        .context("decoding check mark sprite")?;

    let mut positions = HashMap::new();
    positions.insert(MENU, Vec2::new(40.0, 30.0));

    let mut list = DrawList::new().with_fonts(Rc::clone(&fonts));
    let menu = menu::file_menu(MENU);
    let font = Font::new(DEFAULT_FAMILY, 12.0);
    {
        let resources = SharedResources { fonts: &fonts, assets };
        let mut g = Graphics::new(&mut list, &positions, resources, Some(MENU));
        menu.paint(&mut g, &font, Some(check_mark));
        let title = g.measure_string("Open...", Some(&font));
        log::info!("\"Open...\" measures {:.1}×{:.1}", title.x, title.y);
    }

    summarize(&list);
    Ok(())
}

fn summarize(list: &DrawList) {
    let mut counts = [0usize; 5];
    for item in list.items() {
        let slot = match &item.cmd {
            DrawCmd::Blit(_) => 0,
            DrawCmd::Line(_) => 1,
            DrawCmd::Triangle(_) => 2,
            DrawCmd::Label(_) => 3,
            DrawCmd::Field(_) => 4,
        };
        counts[slot] += 1;
        println!("{:?} clip={:?}", item.cmd, item.clip_rect);
    }
    println!();
    println!(
        "{} commands: {} blits, {} lines, {} triangles, {} labels, {} fields",
        list.len(),
        counts[0],
        counts[1],
        counts[2],
        counts[3],
        counts[4]
    );
}

/// 2×2 BMP used as the check mark sprite.
const CHECK_MARK_BMP: &[u8] = &[
    // BITMAPFILEHEADER
    0x42, 0x4D, 0x46, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x36, 0x00, 0x00, 0x00,
    // BITMAPINFOHEADER: 2×2, 32 bpp, BI_RGB
    0x28, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01, 0x00, 0x20, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x13, 0x0B, 0x00, 0x00, 0x13, 0x0B, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // pixels, BGRA, bottom-up
    0x40, 0x40, 0x40, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x40, 0x40, 0xFF,
];
