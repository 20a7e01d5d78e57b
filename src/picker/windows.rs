// =============================================================================
// EYEDROPPER - VERSION WINDOWS
// =============================================================================
// Capture GDI du bureau + fenêtre plein écran + fenêtre d'aperçu
// GDI desktop capture + fullscreen window + preview window
// =============================================================================

// -----------------------------------------------------------------------------
// IMPORTS - Crate
// -----------------------------------------------------------------------------
use crate::color::Rgb;
use crate::config::{PickerConfig, SHIFT_MOVE_PIXELS};
use crate::error::{CaptureError, OverlayError};

use super::layout::{ScreenPoint, Size};
use super::overlay::{Overlay, OverlayEvent, OverlaySetup};
use super::session::{PickerMode, PreviewState};
use super::snapshot::{ChannelOrder, DesktopSnapshot, PixelLayout, RowOrder, BYTES_PER_PIXEL};
use super::{Eyedropper, PixelProbe, ScreenCapture};

// -----------------------------------------------------------------------------
// IMPORTS - Windows API
// -----------------------------------------------------------------------------
use windows::{
    core::{w, PCWSTR},                          // Chaînes larges / Wide strings
    Win32::{
        Foundation::*,                          // Types de base (HWND, RECT) / Base types
        Graphics::Gdi::*,                       // GDI : capture, dessin / capture, drawing
        System::LibraryLoader::GetModuleHandleW, // Handle du module courant / Current module handle
        UI::{
            Input::KeyboardAndMouse::*,         // Entrées clavier/souris / Keyboard/mouse input
            WindowsAndMessaging::*,             // Messages et fenêtres / Messages and windows
        },
    },
};

// -----------------------------------------------------------------------------
// IMPORTS - Bibliothèque standard Rust
// IMPORTS - Rust standard library
// -----------------------------------------------------------------------------
use std::cell::RefCell;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::rc::Rc;

use tracing::debug;

// =============================================================================
// CONSTANTES
// CONSTANTS
// =============================================================================

/// Classe de la fenêtre plein écran qui capture l'entrée
/// Class of the fullscreen window that captures input
const SHIELD_CLASS: PCWSTR = w!("SwatchPickerShield");
const SHIELD_CLASS_NAME: &str = "SwatchPickerShield";

/// Classe de la fenêtre d'aperçu qui suit le curseur
/// Class of the preview window following the cursor
const PREVIEW_CLASS: PCWSTR = w!("SwatchPickerPreview");
const PREVIEW_CLASS_NAME: &str = "SwatchPickerPreview";

/// Identifiant du timer pour rafraîchissement
/// Timer ID for refresh
const TIMER_ID: usize = 1;

/// Valeur renvoyée par GetPixel en cas d'échec
/// Value returned by GetPixel on failure
const CLR_INVALID: u32 = 0xFFFF_FFFF;

/// WM_NCHITTEST : laisse passer les clics vers la fenêtre dessous
/// WM_NCHITTEST: let clicks fall through to the window below
const HIT_TRANSPARENT: isize = -1;

/// Opacité du bouclier en mode direct (invisible mais reçoit les clics)
/// Shield opacity in live mode (invisible but still receives clicks)
const LIVE_SHIELD_ALPHA: u8 = 1;

/// Hauteur d'une ligne de l'étiquette
/// Height of one label line
const LINE_HEIGHT: i32 = 18;

const INSTRUCTIONS: &str = "Click or Enter to pick  -  Arrows to nudge  -  Esc to cancel";
const BANNER_WIDTH: i32 = 480;
const BANNER_HEIGHT: i32 = 30;
const BANNER_TOP: i32 = 20;

// =============================================================================
// GARDES GDI
// GDI GUARDS
// =============================================================================
//
// Chaque handle natif est libéré exactement une fois, sur tous les chemins.
// Every native handle is released exactly once, on every path.

/// DC de l'écran entier (GetDC / ReleaseDC)
/// Whole-screen DC (GetDC / ReleaseDC)
struct ScreenDc(HDC);

impl ScreenDc {
    fn acquire() -> Result<Self, CaptureError> {
        let hdc = unsafe { GetDC(HWND::default()) };
        if hdc.is_invalid() {
            return Err(CaptureError::ScreenDc);
        }
        Ok(Self(hdc))
    }
}

impl Drop for ScreenDc {
    fn drop(&mut self) {
        unsafe {
            let _ = ReleaseDC(HWND::default(), self.0);
        }
    }
}

/// DC mémoire compatible (CreateCompatibleDC / DeleteDC)
/// Compatible memory DC (CreateCompatibleDC / DeleteDC)
struct MemoryDc(HDC);

impl MemoryDc {
    fn compatible_with(screen: &ScreenDc) -> Result<Self, CaptureError> {
        let hdc = unsafe { CreateCompatibleDC(screen.0) };
        if hdc.is_invalid() {
            return Err(CaptureError::MemoryDc);
        }
        Ok(Self(hdc))
    }
}

impl Drop for MemoryDc {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteDC(self.0);
        }
    }
}

/// Bitmap compatible (CreateCompatibleBitmap / DeleteObject)
/// Compatible bitmap (CreateCompatibleBitmap / DeleteObject)
struct OwnedBitmap(HBITMAP);

impl OwnedBitmap {
    fn compatible_with(screen: &ScreenDc, width: i32, height: i32) -> Result<Self, CaptureError> {
        let bitmap = unsafe { CreateCompatibleBitmap(screen.0, width, height) };
        if bitmap.is_invalid() {
            return Err(CaptureError::Bitmap { width, height });
        }
        Ok(Self(bitmap))
    }
}

impl Drop for OwnedBitmap {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteObject(self.0);
        }
    }
}

/// Objet sélectionné dans un DC, restauré au drop
/// Object selected into a DC, restored on drop
struct Selection<'a> {
    dc: HDC,
    previous: HGDIOBJ,
    _scope: PhantomData<&'a MemoryDc>,
}

impl<'a> Selection<'a> {
    fn select(dc: &'a MemoryDc, bitmap: &'a OwnedBitmap) -> Result<Self, CaptureError> {
        let previous = unsafe { SelectObject(dc.0, bitmap.0) };
        if previous.is_invalid() {
            return Err(CaptureError::MemoryDc);
        }
        Ok(Self {
            dc: dc.0,
            previous,
            _scope: PhantomData,
        })
    }
}

impl Drop for Selection<'_> {
    fn drop(&mut self) {
        unsafe {
            let _ = SelectObject(self.dc, self.previous);
        }
    }
}

/// Brosse unie (CreateSolidBrush / DeleteObject)
/// Solid brush (CreateSolidBrush / DeleteObject)
struct OwnedBrush(HBRUSH);

impl OwnedBrush {
    fn solid(color: Rgb) -> Option<Self> {
        let brush = unsafe { CreateSolidBrush(colorref(color)) };
        (!brush.is_invalid()).then(|| Self(brush))
    }

    fn fill(&self, hdc: HDC, rect: &RECT) {
        unsafe {
            let _ = FillRect(hdc, rect, self.0);
        }
    }

    fn frame(&self, hdc: HDC, rect: &RECT) {
        unsafe {
            let _ = FrameRect(hdc, rect, self.0);
        }
    }
}

impl Drop for OwnedBrush {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteObject(self.0);
        }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

/// COLORREF est au format 0x00BBGGRR
/// COLORREF is laid out as 0x00BBGGRR
fn colorref(color: Rgb) -> COLORREF {
    COLORREF(color.r as u32 | (color.g as u32) << 8 | (color.b as u32) << 16)
}

fn rgb_from_colorref(value: COLORREF) -> Rgb {
    Rgb::new(
        (value.0 & 0xFF) as u8,
        ((value.0 >> 8) & 0xFF) as u8,
        ((value.0 >> 16) & 0xFF) as u8,
    )
}

/// En-tête DIB 32 bits BGRA ; hauteur négative = lignes de haut en bas
/// 32-bit BGRA DIB header; negative height = top-down rows
fn dib_info(width: i32, height: i32) -> BITMAPINFO {
    BITMAPINFO {
        bmiHeader: BITMAPINFOHEADER {
            biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: width,
            biHeight: height,
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn rect(left: i32, top: i32, width: i32, height: i32) -> RECT {
    RECT {
        left,
        top,
        right: left + width,
        bottom: top + height,
    }
}

fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

// =============================================================================
// CAPTURE D'ÉCRAN
// SCREEN CAPTURE
// =============================================================================

/// Capture de l'écran principal via BitBlt + GetDIBits
/// Primary display capture through BitBlt + GetDIBits
pub struct GdiCapture;

impl ScreenCapture for GdiCapture {
    fn screen_size(&self) -> Option<Size> {
        let (width, height) =
            unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
        (width > 0 && height > 0).then(|| Size::new(width as u32, height as u32))
    }

    fn capture(&self) -> Result<DesktopSnapshot, CaptureError> {
        let size = self.screen_size().ok_or(CaptureError::ScreenMetrics)?;
        let (width, height) = (size.width as i32, size.height as i32);

        let screen = ScreenDc::acquire()?;
        let memory = MemoryDc::compatible_with(&screen)?;
        let bitmap = OwnedBitmap::compatible_with(&screen, width, height)?;

        {
            let _selected = Selection::select(&memory, &bitmap)?;
            unsafe { BitBlt(memory.0, 0, 0, width, height, screen.0, 0, 0, SRCCOPY) }
                .map_err(|e| CaptureError::Transfer(e.to_string()))?;
        }

        // GetDIBits requires the bitmap to be deselected from every DC
        let layout = PixelLayout::bgra_bottom_up(size.width);
        let mut info = dib_info(width, height);
        let mut data = vec![0u8; layout.stride * size.height as usize];
        let copied = unsafe {
            GetDIBits(
                memory.0,
                bitmap.0,
                0,
                height as u32,
                Some(data.as_mut_ptr().cast()),
                &mut info,
                DIB_RGB_COLORS,
            )
        };
        if copied != height {
            return Err(CaptureError::Readback { copied, expected: height });
        }

        DesktopSnapshot::from_raw(size, ScreenPoint::ORIGIN, layout, data)
    }
}

/// Lecture d'un pixel de l'écran en direct (GetPixel)
/// Live screen pixel query (GetPixel)
pub struct GdiPixelProbe;

impl PixelProbe for GdiPixelProbe {
    fn pixel_at(&self, at: ScreenPoint) -> Option<Rgb> {
        let screen = ScreenDc::acquire().ok()?;
        let value = unsafe { GetPixel(screen.0, at.x, at.y) };
        (value.0 != CLR_INVALID).then(|| rgb_from_colorref(value))
    }
}

// =============================================================================
// ÉTAT DES FENÊTRES
// WINDOW STATE
// =============================================================================

/// Données de dessin partagées avec les procédures de fenêtre.
/// Un seul thread (celui de la boucle de messages) y accède.
/// Paint data shared with the window procedures.
/// Only the message loop thread touches it.
struct Surface {
    backdrop: Option<Rc<DesktopSnapshot>>,
    frame: Option<PaintFrame>,
    events: VecDeque<OverlayEvent>,
    border: i32,
    label_height: i32,
}

/// Ce que la fenêtre d'aperçu dessine au prochain WM_PAINT
/// What the preview window draws on its next WM_PAINT
struct PaintFrame {
    color: Rgb,
    label: String,
    size: Size,
    /// Magnified pixels as top-down BGRA, with their edge
    image: Option<(Vec<u8>, u32, u32)>,
    /// Reticle (x, y, edge) in image coordinates
    reticle: Option<(u32, u32, u32)>,
}

impl PaintFrame {
    fn from_preview(preview: &PreviewState) -> Self {
        let image = preview.image.as_ref().map(|view| {
            let (w, h) = view.image.dimensions();
            let bgra = view
                .image
                .pixels()
                .flat_map(|p| [p.0[2], p.0[1], p.0[0], 0])
                .collect();
            (bgra, w, h)
        });
        Self {
            color: preview.color,
            label: preview.label.clone(),
            size: preview.size,
            image,
            reticle: preview.image.as_ref().map(|view| view.reticle()),
        }
    }
}

thread_local! {
    static SURFACE: RefCell<Option<Surface>> = const { RefCell::new(None) };
}

fn push_event(event: OverlayEvent) {
    SURFACE.with(|cell| {
        if let Ok(mut surface) = cell.try_borrow_mut() {
            if let Some(surface) = surface.as_mut() {
                surface.events.push_back(event);
            }
        }
    });
}

fn pop_event() -> Option<OverlayEvent> {
    SURFACE.with(|cell| {
        cell.try_borrow_mut()
            .ok()
            .and_then(|mut surface| surface.as_mut().and_then(|s| s.events.pop_front()))
    })
}

// =============================================================================
// DESSIN
// DRAWING
// =============================================================================

/// Bouclier : capture figée en mode snapshot, noir (quasi transparent) en
/// mode direct
/// Shield: frozen capture in snapshot mode, black (nearly transparent) in
/// live mode
fn paint_shield(hwnd: HWND) {
    unsafe {
        let mut ps = PAINTSTRUCT::default();
        let hdc = BeginPaint(hwnd, &mut ps);

        SURFACE.with(|cell| {
            let Ok(surface) = cell.try_borrow() else { return };
            match surface.as_ref().and_then(|s| s.backdrop.as_deref()) {
                Some(snapshot) if blit_snapshot(hdc, snapshot) => {
                    draw_banner(hdc, snapshot.width() as i32)
                }
                _ => {
                    if let Some(black) = OwnedBrush::solid(Rgb::new(0, 0, 0)) {
                        black.fill(hdc, &ps.rcPaint);
                    }
                }
            }
        });

        let _ = EndPaint(hwnd, &ps);
    }
}

fn blit_snapshot(hdc: HDC, snapshot: &DesktopSnapshot) -> bool {
    let layout = snapshot.layout();
    let (width, height) = (snapshot.width() as i32, snapshot.height() as i32);
    if layout.channels != ChannelOrder::Bgra || layout.stride != width as usize * BYTES_PER_PIXEL {
        return false;
    }
    let signed_height = match layout.rows {
        RowOrder::BottomUp => height,
        RowOrder::TopDown => -height,
    };
    let info = dib_info(width, signed_height);
    let copied = unsafe {
        StretchDIBits(
            hdc,
            0,
            0,
            width,
            height,
            0,
            0,
            width,
            height,
            Some(snapshot.raw().as_ptr().cast()),
            &info,
            DIB_RGB_COLORS,
            SRCCOPY,
        )
    };
    copied != 0
}

fn draw_banner(hdc: HDC, screen_width: i32) {
    let mut area = rect((screen_width - BANNER_WIDTH) / 2, BANNER_TOP, BANNER_WIDTH, BANNER_HEIGHT);
    if let Some(black) = OwnedBrush::solid(Rgb::new(0, 0, 0)) {
        black.fill(hdc, &area);
    }
    let mut text = wide(INSTRUCTIONS);
    unsafe {
        let _ = SetBkMode(hdc, TRANSPARENT);
        let _ = SetTextColor(hdc, colorref(Rgb::WHITE));
        let _ = DrawTextW(hdc, &mut text, &mut area, DT_CENTER | DT_VCENTER | DT_SINGLELINE);
    }
}

/// Aperçu : cadre blanc, loupe ou pastille, réticule, étiquette
/// Preview: white frame, magnified view or swatch, reticle, label
fn paint_preview(hwnd: HWND) {
    unsafe {
        let mut ps = PAINTSTRUCT::default();
        let hdc = BeginPaint(hwnd, &mut ps);

        SURFACE.with(|cell| {
            let Ok(surface) = cell.try_borrow() else { return };
            let Some(surface) = surface.as_ref() else { return };
            if let Some(frame) = surface.frame.as_ref() {
                draw_frame(hdc, frame, surface.border, surface.label_height);
            }
        });

        let _ = EndPaint(hwnd, &ps);
    }
}

fn draw_frame(hdc: HDC, frame: &PaintFrame, border: i32, label_height: i32) {
    let (w, h) = (frame.size.width as i32, frame.size.height as i32);
    let content = rect(border, border, w - 2 * border, h - label_height - 2 * border);

    if let Some(white) = OwnedBrush::solid(Rgb::WHITE) {
        white.fill(hdc, &rect(0, 0, w, h - label_height));
    }

    match &frame.image {
        Some((pixels, iw, ih)) => {
            let info = dib_info(*iw as i32, -(*ih as i32));
            unsafe {
                let _ = StretchDIBits(
                    hdc,
                    border,
                    border,
                    *iw as i32,
                    *ih as i32,
                    0,
                    0,
                    *iw as i32,
                    *ih as i32,
                    Some(pixels.as_ptr().cast()),
                    &info,
                    DIB_RGB_COLORS,
                    SRCCOPY,
                );
            }
            if let Some((x, y, edge)) = frame.reticle {
                let ink = if frame.color.is_dark() { Rgb::WHITE } else { Rgb::new(0, 0, 0) };
                if let Some(brush) = OwnedBrush::solid(ink) {
                    let cell = rect(border + x as i32, border + y as i32, edge as i32, edge as i32);
                    brush.frame(hdc, &cell);
                }
            }
        }
        None => {
            if let Some(swatch) = OwnedBrush::solid(frame.color) {
                swatch.fill(hdc, &content);
            }
        }
    }

    let label = rect(0, h - label_height, w, label_height);
    if let Some(black) = OwnedBrush::solid(Rgb::new(0, 0, 0)) {
        black.fill(hdc, &label);
    }
    unsafe {
        let _ = SetBkMode(hdc, TRANSPARENT);
        let _ = SetTextColor(hdc, colorref(Rgb::WHITE));
        for (i, line) in frame.label.lines().enumerate() {
            let _ = TextOutW(hdc, 6, label.top + 2 + i as i32 * LINE_HEIGHT, &wide(line));
        }
    }
}

// =============================================================================
// ÉVÉNEMENTS
// EVENTS
// =============================================================================

/// Traduit une touche en événement ; Shift multiplie le déplacement
/// Translates a key into an event; Shift multiplies the nudge
fn key_event(vk: VIRTUAL_KEY, shift: bool) -> Option<OverlayEvent> {
    let amt = if shift { SHIFT_MOVE_PIXELS } else { 1 };
    match vk {
        VK_ESCAPE => Some(OverlayEvent::Escape),
        VK_RETURN | VK_SPACE => Some(OverlayEvent::Confirm),
        VK_LEFT => Some(OverlayEvent::Nudge { dx: -amt, dy: 0 }),
        VK_RIGHT => Some(OverlayEvent::Nudge { dx: amt, dy: 0 }),
        VK_UP => Some(OverlayEvent::Nudge { dx: 0, dy: -amt }),
        VK_DOWN => Some(OverlayEvent::Nudge { dx: 0, dy: amt }),
        _ => None,
    }
}

// =============================================================================
// WINDOW PROCEDURES
// =============================================================================

extern "system" fn shield_proc(hwnd: HWND, msg: u32, wp: WPARAM, lp: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_TIMER if wp.0 == TIMER_ID => {
                push_event(OverlayEvent::Tick);
                LRESULT(0)
            }
            WM_LBUTTONDOWN => {
                let mut pt = POINT {
                    x: (lp.0 & 0xFFFF) as i16 as i32,
                    y: ((lp.0 >> 16) & 0xFFFF) as i16 as i32,
                };
                let _ = ClientToScreen(hwnd, &mut pt);
                push_event(OverlayEvent::PrimaryDown(ScreenPoint::new(pt.x, pt.y)));
                LRESULT(0)
            }
            WM_RBUTTONDOWN => {
                push_event(OverlayEvent::SecondaryDown);
                LRESULT(0)
            }
            WM_KEYDOWN => {
                let shift = GetKeyState(VK_SHIFT.0 as i32) < 0;
                if let Some(event) = key_event(VIRTUAL_KEY(wp.0 as u16), shift) {
                    push_event(event);
                }
                LRESULT(0)
            }
            WM_PAINT => {
                paint_shield(hwnd);
                LRESULT(0)
            }
            WM_ERASEBKGND => {
                // Ne pas effacer le fond (évite le scintillement)
                LRESULT(1)
            }
            WM_CLOSE => {
                // Destruction handled by the overlay owner
                push_event(OverlayEvent::Closed);
                LRESULT(0)
            }
            _ => DefWindowProcW(hwnd, msg, wp, lp),
        }
    }
}

extern "system" fn preview_proc(hwnd: HWND, msg: u32, wp: WPARAM, lp: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_NCHITTEST => LRESULT(HIT_TRANSPARENT),
            WM_MOUSEACTIVATE => LRESULT(MA_NOACTIVATE as isize),
            WM_PAINT => {
                paint_preview(hwnd);
                LRESULT(0)
            }
            WM_ERASEBKGND => LRESULT(1),
            _ => DefWindowProcW(hwnd, msg, wp, lp),
        }
    }
}

// =============================================================================
// OVERLAY
// =============================================================================

/// Deux fenêtres popup : un bouclier plein écran qui reçoit l'entrée et un
/// aperçu sans activation qui suit le curseur
/// Two popup windows: a fullscreen shield receiving input and a
/// non-activating preview following the cursor
pub struct GdiOverlay {
    hinst: HINSTANCE,
    shield: HWND,
    preview: HWND,
    registered: Vec<PCWSTR>,
    tick_ms: u32,
    timer_running: bool,
    preview_shown: bool,
}

impl GdiOverlay {
    /// Crée les fenêtres (cachées) ; tout est libéré si une étape échoue
    /// Creates the (hidden) windows; everything is released if a step fails
    pub fn open(setup: &OverlaySetup) -> Result<Self, OverlayError> {
        let hinst: HINSTANCE = unsafe { GetModuleHandleW(None) }
            .map_err(|e| OverlayError::ModuleHandle(e.to_string()))?
            .into();

        SURFACE.with(|cell| {
            *cell.borrow_mut() = Some(Surface {
                backdrop: setup.backdrop.clone(),
                frame: None,
                events: VecDeque::new(),
                border: setup.border as i32,
                label_height: setup.label_height as i32,
            });
        });

        let mut overlay = GdiOverlay {
            hinst,
            shield: HWND::default(),
            preview: HWND::default(),
            registered: Vec::with_capacity(2),
            tick_ms: setup.tick_interval.as_millis().clamp(1, u32::MAX as u128) as u32,
            timer_running: false,
            preview_shown: false,
        };

        let crosshair = unsafe { LoadCursorW(None, IDC_CROSS) }.unwrap_or_default();
        overlay.register(SHIELD_CLASS, SHIELD_CLASS_NAME, Some(shield_proc), crosshair)?;
        overlay.register(PREVIEW_CLASS, PREVIEW_CLASS_NAME, Some(preview_proc), crosshair)?;

        let mut shield_style = WS_EX_TOPMOST | WS_EX_TOOLWINDOW;
        if setup.mode == PickerMode::Live {
            shield_style |= WS_EX_LAYERED;
        }
        overlay.shield = overlay.create(shield_style, SHIELD_CLASS, setup.screen)?;
        if setup.mode == PickerMode::Live {
            let shield = overlay.shield;
            unsafe { SetLayeredWindowAttributes(shield, COLORREF(0), LIVE_SHIELD_ALPHA, LWA_ALPHA) }
                .map_err(|e| OverlayError::CreateWindow(e.to_string()))?;
        }

        overlay.preview = overlay.create(
            WS_EX_TOPMOST | WS_EX_TOOLWINDOW | WS_EX_NOACTIVATE,
            PREVIEW_CLASS,
            setup.preview_size,
        )?;

        debug!(
            mode = ?setup.mode,
            width = setup.screen.width,
            height = setup.screen.height,
            "Overlay windows created"
        );
        Ok(overlay)
    }

    fn register(
        &mut self,
        class: PCWSTR,
        name: &'static str,
        proc: WNDPROC,
        cursor: HCURSOR,
    ) -> Result<(), OverlayError> {
        let wc = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: proc,
            hInstance: self.hinst,
            hCursor: cursor,
            lpszClassName: class,
            ..Default::default()
        };
        if unsafe { RegisterClassExW(&wc) } == 0 {
            return Err(OverlayError::RegisterClass(name));
        }
        self.registered.push(class);
        Ok(())
    }

    fn create(
        &self,
        ex_style: WINDOW_EX_STYLE,
        class: PCWSTR,
        size: Size,
    ) -> Result<HWND, OverlayError> {
        unsafe {
            CreateWindowExW(
                ex_style,
                class,
                w!(""),
                WS_POPUP,
                0,
                0,
                size.width as i32,
                size.height as i32,
                None,
                None,
                self.hinst,
                None,
            )
        }
        .map_err(|e| OverlayError::CreateWindow(e.to_string()))
    }

    fn kill_timer(&mut self) {
        if self.timer_running {
            unsafe {
                let _ = KillTimer(self.shield, TIMER_ID);
            }
            self.timer_running = false;
        }
    }
}

impl Overlay for GdiOverlay {
    type Error = OverlayError;

    fn show(&mut self) -> Result<(), OverlayError> {
        unsafe {
            let _ = ShowWindow(self.shield, SW_SHOW);
            let _ = SetForegroundWindow(self.shield);
            let _ = SetFocus(self.shield);
            let _ = SetCapture(self.shield);

            if SetTimer(self.shield, TIMER_ID, self.tick_ms, None) == 0 {
                return Err(OverlayError::Timer(self.tick_ms));
            }
        }
        self.timer_running = true;
        Ok(())
    }

    fn next_event(&mut self) -> OverlayEvent {
        loop {
            if let Some(event) = pop_event() {
                return event;
            }
            let mut msg = MSG::default();
            unsafe {
                if GetMessageW(&mut msg, HWND::default(), 0, 0).0 <= 0 {
                    return OverlayEvent::Closed;
                }
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
    }

    fn cursor_position(&self) -> Option<ScreenPoint> {
        let mut pt = POINT::default();
        unsafe { GetCursorPos(&mut pt) }.ok()?;
        Some(ScreenPoint::new(pt.x, pt.y))
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) -> Option<ScreenPoint> {
        let target = self.cursor_position()?.offset(dx, dy);
        unsafe { SetCursorPos(target.x, target.y) }.ok()?;
        // The system clamps the cursor to the desktop
        self.cursor_position()
    }

    fn present(&mut self, preview: &PreviewState) {
        let frame = PaintFrame::from_preview(preview);
        SURFACE.with(|cell| {
            if let Ok(mut surface) = cell.try_borrow_mut() {
                if let Some(surface) = surface.as_mut() {
                    surface.frame = Some(frame);
                }
            }
        });

        let mut flags = SWP_NOACTIVATE;
        if !self.preview_shown {
            flags |= SWP_SHOWWINDOW;
            self.preview_shown = true;
        }
        unsafe {
            let _ = SetWindowPos(
                self.preview,
                HWND_TOPMOST,
                preview.position.x,
                preview.position.y,
                preview.size.width as i32,
                preview.size.height as i32,
                flags,
            );
            let _ = InvalidateRect(self.preview, None, FALSE);
        }
    }

    fn stop_ticks(&mut self) {
        self.kill_timer();
    }

    fn dispose(self) {
        drop(self);
    }
}

impl Drop for GdiOverlay {
    fn drop(&mut self) {
        // Timer first: no WM_TIMER may reach a destroyed window
        self.kill_timer();
        unsafe {
            let _ = ReleaseCapture();
            if !self.preview.0.is_null() {
                let _ = DestroyWindow(self.preview);
            }
            if !self.shield.0.is_null() {
                let _ = DestroyWindow(self.shield);
            }
            for class in self.registered.drain(..) {
                let _ = UnregisterClassW(class, self.hinst);
            }
        }
        SURFACE.with(|cell| {
            if let Ok(mut surface) = cell.try_borrow_mut() {
                *surface = None;
            }
        });
        debug!("Overlay windows destroyed");
    }
}

// =============================================================================
// API PUBLIQUE
// =============================================================================

/// Capture GDI, repli GetPixel, overlay Win32
/// GDI capture, GetPixel fallback, Win32 overlay
pub fn pick(config: &PickerConfig) -> Option<Rgb> {
    Eyedropper::new(GdiCapture, GdiPixelProbe, config.clone()).pick(GdiOverlay::open)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorref_layout() {
        let color = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(colorref(color).0, 0x0056_3412);
        assert_eq!(rgb_from_colorref(colorref(color)), color);
    }

    #[test]
    fn test_shift_arrow_moves_faster() {
        assert_eq!(key_event(VK_LEFT, false), Some(OverlayEvent::Nudge { dx: -1, dy: 0 }));
        assert_eq!(
            key_event(VK_DOWN, true),
            Some(OverlayEvent::Nudge { dx: 0, dy: SHIFT_MOVE_PIXELS })
        );
    }

    #[test]
    fn test_confirm_and_cancel_keys() {
        assert_eq!(key_event(VK_RETURN, false), Some(OverlayEvent::Confirm));
        assert_eq!(key_event(VK_SPACE, true), Some(OverlayEvent::Confirm));
        assert_eq!(key_event(VK_ESCAPE, false), Some(OverlayEvent::Escape));
        assert_eq!(key_event(VK_C, false), None);
    }
}
