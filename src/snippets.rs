// =============================================================================
// snippets.rs - Extraits de code embarquant une couleur
// snippets.rs - Source code snippets embedding a color
// =============================================================================

use serde::Serialize;

use crate::color::Rgb;

/// Un langage et la façon d'y écrire une couleur
/// One language and how to write a color in it
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Snippet {
    /// Stable lowercase identifier used on the command line
    pub key: &'static str,
    /// Name shown to users
    pub display: &'static str,
    /// Text with `{hex}` (#RRGGBB), `{bare}` (RRGGBB), `{r}`, `{g}` and `{b}`
    /// placeholders
    #[serde(skip)]
    template: &'static str,
}

impl Snippet {
    pub fn render(&self, color: Rgb) -> String {
        self.template
            .replace("{hex}", &color.to_hex())
            .replace("{bare}", &color.hex_digits())
            .replace("{r}", &color.r.to_string())
            .replace("{g}", &color.g.to_string())
            .replace("{b}", &color.b.to_string())
    }
}

/// Table immuable des extraits, dans l'ordre de déclaration
/// Immutable snippet table, in declaration order
#[derive(Clone, Debug)]
pub struct SnippetTable {
    snippets: Vec<Snippet>,
}

impl SnippetTable {
    pub fn builtin() -> Self {
        let rows: &[(&'static str, &'static str, &'static str)] = &[
            ("css", "CSS", "color: {hex};\n/* or */\ncolor: rgb({r}, {g}, {b});"),
            ("html", "HTML", "<span style=\"color: {hex};\"></span>"),
            ("xml", "XML", "<color hex=\"{hex}\" rgb=\"{r},{g},{b}\" />"),
            (
                "json",
                "JSON",
                "{\n  \"hex\": \"{hex}\",\n  \"rgb\": { \"r\": {r}, \"g\": {g}, \"b\": {b} }\n}",
            ),
            ("yaml", "YAML", "hex: {hex}\nrgb: [{r}, {g}, {b}]"),
            ("toml", "TOML", "hex = \"{hex}\"\nrgb = [{r}, {g}, {b}]"),
            ("ini", "INI", "[color]\nhex={hex}\nr={r}\ng={g}\nb={b}"),
            (
                "javascript",
                "JavaScript",
                "const colorHex = '{hex}';\nconst colorRGB = { r: {r}, g: {g}, b: {b} };",
            ),
            (
                "typescript",
                "TypeScript",
                "const colorHex: string = '{hex}';\ninterface RGB { r:number; g:number; b:number }\nconst colorRGB: RGB = { r:{r}, g:{g}, b:{b} };",
            ),
            ("python", "Python", "color_hex = '{hex}'\ncolor_rgb = ({r}, {g}, {b})"),
            ("java", "Java", "String colorHex = \"{hex}\";\nint[] rgb = {{r}, {g}, {b}};"),
            (
                "csharp",
                "C#",
                "string colorHex = \"{hex}\";\nvar rgb = new { R = {r}, G = {g}, B = {b} };",
            ),
            ("vbnet", "VB.NET", "Dim colorHex = \"{hex}\"\nDim r = {r}, g = {g}, b = {b}"),
            ("fsharp", "F#", "let colorHex = \"{hex}\"\nlet rgb = {r}, {g}, {b}"),
            ("php", "PHP", "$colorHex = '{hex}';\n$rgb = ['r'=>{r},'g'=>{g},'b'=>{b}];"),
            ("ruby", "Ruby", "color_hex = '{hex}'\nrgb = { r: {r}, g: {g}, b: {b} }"),
            ("swift", "Swift", "let colorHex = \"{hex}\"\nlet rgb = ({r}, {g}, {b})"),
            (
                "kotlin",
                "Kotlin",
                "val colorHex = \"{hex}\"\ndata class RGB(val r:Int, val g:Int, val b:Int)\nval rgb = RGB({r}, {g}, {b})",
            ),
            (
                "scala",
                "Scala",
                "val colorHex = \"{hex}\"\ncase class RGB(r:Int,g:Int,b:Int)\nval rgb = RGB({r},{g},{b})",
            ),
            ("groovy", "Groovy", "def colorHex = '{hex}'\ndef rgb = [r:{r}, g:{g}, b:{b}]"),
            (
                "dart",
                "Dart",
                "const colorHex = '{hex}';\nconst color = Color.fromARGB(255,{r},{g},{b});",
            ),
            (
                "go",
                "Go",
                "colorHex := \"{hex}\"\ntype RGB struct{R,G,B uint8}\nrgb := RGB{{r},{g},{b}}",
            ),
            ("rust", "Rust", "let color_hex = \"{hex}\";\nlet rgb = ({r}u8,{g}u8,{b}u8);"),
            (
                "cpp",
                "C++",
                "std::string colorHex = \"{hex}\";\nstruct RGB{int r,g,b;} rgb{{r},{g},{b}};",
            ),
            (
                "c",
                "C",
                "const char* colorHex = \"{hex}\";\nunsigned char rgb[3] = {{r}, {g}, {b}};",
            ),
            ("haskell", "Haskell", "colorHex = \"{hex}\"\nrgb = ({r},{g},{b})"),
            (
                "erlang",
                "Erlang",
                "-define(COLOR_HEX, \"{hex}\").\n-define(COLOR_RGB, {{r},{g},{b}}).",
            ),
            ("elixir", "Elixir", "color_hex = \"{hex}\"\nrgb = {{r}, {g}, {b}}"),
            ("clojure", "Clojure", "(def color-hex \"{hex}\")\n(def rgb [{r} {g} {b}])"),
            (
                "lisp",
                "Common Lisp",
                "(defparameter *color-hex* \"{hex}\")\n(defparameter *rgb* '({r} {g} {b}))",
            ),
            ("scheme", "Scheme", "(define color-hex \"{hex}\")\n(define rgb '({r} {g} {b}))"),
            ("racket", "Racket", "(define color-hex \"{hex}\")\n(define rgb '({r} {g} {b}))"),
            ("r", "R", "color_hex <- \"{hex}\"\nrgb <- c({r},{g},{b})"),
            (
                "matlab",
                "MATLAB",
                "colorHex = '{hex}';\nrgb = [{r} {g} {b}];\nrgbNorm = [{r}/255 {g}/255 {b}/255];",
            ),
            ("julia", "Julia", "color_hex = \"{hex}\"\nrgb = ({r},{g},{b})"),
            (
                "sql",
                "SQL",
                "DECLARE @colorHex VARCHAR(7) = '{hex}';\nDECLARE @r INT={r}, @g INT={g}, @b INT={b};",
            ),
            (
                "plsql",
                "PL/SQL",
                "DECLARE color_hex VARCHAR2(7):='{hex}'; r PLS_INTEGER:={r}; g PLS_INTEGER:={g}; b PLS_INTEGER:={b}; BEGIN NULL; END;",
            ),
            ("powershell", "PowerShell", "$colorHex = '{hex}'\n$rgb = @{r={r}; g={g}; b={b}}"),
            ("bash", "Bash", "COLOR_HEX='{hex}'\nR={r}; G={g}; B={b}"),
            ("perl", "Perl", "my $color_hex = '{hex}';\nmy @rgb = ({r},{g},{b});"),
            ("lua", "Lua", "local color_hex = '{hex}'\nlocal rgb = { r={r}, g={g}, b={b} }"),
            ("tcl", "Tcl", "set color_hex \"{hex}\"\nset rgb {{r} {g} {b}}"),
            ("awk", "AWK", "BEGIN{colorHex=\"{hex}\"; r={r}; g={g}; b={b};}"),
            ("sed", "Sed", "# usage examples replacing with the color\ns/{hex}/replacement/g"),
            ("zig", "Zig", "const COLOR_HEX = \"{hex}\"; const rgb = [_]u8{{r},{g},{b}};"),
            ("nim", "Nim", "let colorHex = \"{hex}\"\nlet rgb = [{r}, {g}, {b}]"),
            ("crystal", "Crystal", "color_hex = \"{hex}\"\nrgb = { {r}, {g}, {b} }"),
            (
                "fortran",
                "Fortran",
                "character(len=7) :: colorHex = '{hex}'\ninteger, dimension(3) :: rgb = (/ {r},{g},{b} /)",
            ),
            (
                "cobol",
                "COBOL",
                "01 COLOR-HEX PIC X(7) VALUE '{hex}'.\n01 COLOR-R PIC 9(3) VALUE {r}.",
            ),
            (
                "pascal",
                "Pascal",
                "const ColorHex = '{hex}';\nvar rgb: array[0..2] of Byte = ({r},{g},{b});",
            ),
            (
                "delphi",
                "Delphi",
                "const ColorHex = '{hex}';\nvar RGB: record R,G,B:Byte end = (R:{r};G:{g};B:{b});",
            ),
            (
                "ada",
                "Ada",
                "Color_Hex : constant String := \"{hex}\";\nRGB : constant array(1..3) of Integer := ({r}, {g}, {b});",
            ),
            ("assembly", "Assembly", "colorHex db '{hex}',0\nrgb db {r},{g},{b}"),
            ("prolog", "Prolog", "color_hex('{hex}').\nrgb({r},{g},{b})."),
            ("mercury", "Mercury", "color_hex(\"{hex}\").\nrgb({r},{g},{b})."),
            ("ocaml", "OCaml", "let color_hex = \"{hex}\"\nlet rgb = ({r},{g},{b})"),
            ("reasonml", "ReasonML", "let colorHex = \"{hex}\";\nlet rgb = ({r},{g},{b});"),
            ("elm", "Elm", "colorHex = \"{hex}\"\nrgb = ({r},{g},{b})"),
            ("sml", "SML", "val colorHex = \"{hex}\"\nval rgb = ({r}, {g}, {b})"),
            ("janet", "Janet", "(def color-hex \"{hex}\")\n(def rgb [{r} {g} {b}])"),
            ("regex", "Regex", "{bare}|{r},{g},{b}"),
            (
                "objc",
                "Objective-C",
                "NSString *colorHex = @\"{hex}\";\nCGFloat r = {r}/255.0, g = {g}/255.0, b = {b}/255.0;\nUIColor *color = [UIColor colorWithRed:r green:g blue:b alpha:1.0];",
            ),
            (
                "vba",
                "VBA",
                "Dim ColorHex As String: ColorHex = \"{hex}\"\nDim R As Integer: R={r}\nDim G As Integer: G={g}\nDim B As Integer: B={b}",
            ),
            ("logo", "Logo", "make \"colorHex \"{hex}\nmake \"rgb [{r} {g} {b}]"),
            ("forth", "Forth", "\\ Hex {hex}\n{r} {g} {b} \" RGB"),
            (
                "haxe",
                "Haxe",
                "var colorHex:String = \"{hex}\";\nvar rgb = { r:{r}, g:{g}, b:{b} };",
            ),
            ("smalltalk", "Smalltalk", "colorHex := '{hex}'.\nrgb := { {r}. {g}. {b} }."),
            (
                "postscript",
                "PostScript",
                "/R {r} def /G {g} def /B {b} def\nR 255 div G 255 div B 255 div setrgbcolor",
            ),
            ("qsharp", "Q#", "let colorHex = \"{hex}\";\nlet rgb = ({r}, {g}, {b});"),
            (
                "processing",
                "Processing",
                "String colorHex = \"{hex}\";\ncolor c = color({r}, {g}, {b});",
            ),
            ("shell", "Shell", "COLOR_HEX='{hex}'\nR={r}; G={g}; B={b}"),
            ("markdown", "Markdown", "`{hex}`\nRGB: {r}, {g}, {b}"),
            ("dockerfile", "Dockerfile", "ENV COLOR_HEX={hex} COLOR_R={r} COLOR_G={g} COLOR_B={b}"),
            (
                "graphql",
                "GraphQL",
                "fragment ColorInfo on Color {\n  hex: \"{hex}\"\n  rgb { r: {r}, g: {g}, b: {b} }\n}",
            ),
            (
                "jsx",
                "JSX",
                "const style = { color: '{hex}' };\n<span style={{color: '{hex}'}}></span>",
            ),
            ("sass", "Sass", "$color: {hex};\n.selector { color: $color; }"),
            ("less", "Less", "@color: {hex};\n.selector { color: @color; }"),
            (
                "solidity",
                "Solidity",
                "string constant COLOR_HEX = \"{hex}\";\nuint8 constant R={r}; uint8 constant G={g}; uint8 constant B={b};",
            ),
            ("gdscript", "GDScript", "var COLOR_HEX = \"{hex}\"\nvar rgb = Color8({r}, {g}, {b})"),
            ("latex", "LaTeX", "\\definecolor{custom}{RGB}{{r},{g},{b}} % {hex}"),
            ("verilog", "Verilog", "localparam COLOR_HEX = 24'h{bare};"),
            ("vhdl", "VHDL", "constant COLOR_HEX : std_logic_vector(23 downto 0) := x\"{bare}\";"),
            ("raku", "Raku", "my $color-hex = '{hex}';\nmy @rgb = {r},{g},{b};"),
            ("apl", "APL", "⍝ Color\ncolorHex←'{hex}' ⋄ rgb←{r} {g} {b}"),
            ("wasm", "WebAssembly", ";; 0x{bare}\n(global $color (mut i32) (i32.const 0x{bare}))"),
            ("d", "D", "string colorHex = \"{hex}\";\nauto rgb = [{r}, {g}, {b}];"),
            ("vala", "Vala", "string color_hex = \"{hex}\";\nvar rgb = { {r}, {g}, {b} };"),
            (
                "purescript",
                "PureScript",
                "colorHex :: String\ncolorHex = \"{hex}\"\n\nrgb :: { r :: Int, g :: Int, b :: Int }\nrgb = { r: {r}, g: {g}, b: {b} }",
            ),
            (
                "idris",
                "Idris",
                "colorHex : String\ncolorHex = \"{hex}\"\n\nrgb : (Int, Int, Int)\nrgb = ({r}, {g}, {b})",
            ),
            ("agda", "Agda", "colorHex : String\ncolorHex = \"{hex}\"\n\nrgb : {r} {g} {b}"),
            ("coffeescript", "CoffeeScript", "colorHex = '{hex}'\nrgb = r:{r}, g:{g}, b:{b}"),
            ("livescript", "LiveScript", "color-hex = '{hex}'\nrgb = r: {r}, g: {g}, b: {b}"),
            (
                "actionscript",
                "ActionScript",
                "var colorHex:String = \"{hex}\";\nvar rgb:Object = {r:{r}, g:{g}, b:{b}};",
            ),
            (
                "autoit",
                "AutoIt",
                "Global $sColorHex = \"{hex}\"\nGlobal $iR = {r}, $iG = {g}, $iB = {b}",
            ),
            ("autohotkey", "AutoHotkey", "colorHex := \"{hex}\"\nrgb := {r:{r}, g:{g}, b:{b}}"),
            (
                "dylan",
                "Dylan",
                "define constant $color-hex = \"{hex}\";\ndefine constant $rgb = #({r}, {g}, {b});",
            ),
            (
                "eiffel",
                "Eiffel",
                "color_hex: STRING = \"{hex}\"\nrgb: ARRAY[INTEGER] is [{r}, {g}, {b}]",
            ),
            ("io", "Io", "colorHex := \"{hex}\"\nrgb := list({r}, {g}, {b})"),
            (
                "mongodb",
                "MongoDB",
                "db.colors.insert({ hex: \"{hex}\", rgb: { r: {r}, g: {g}, b: {b} } })",
            ),
            ("mysql", "MySQL", "SET @color_hex = '{hex}';\nSET @r = {r}, @g = {g}, @b = {b};"),
            ("postgresql", "PostgreSQL", "SELECT '{hex}' AS color_hex, ROW({r}, {g}, {b}) AS rgb;"),
            ("rebol", "REBOL", "color-hex: {hex}\nrgb: make tuple! [{r} {g} {b}]"),
            ("red", "Red", "color-hex: #{bare}\nrgb: make tuple! [{r} {g} {b}]"),
            ("ring", "Ring", "colorHex = \"{hex}\"\nrgb = [{r},{g},{b}]"),
            ("sas", "SAS", "%let color_hex = {hex};\n%let r = {r}; %let g = {g}; %let b = {b};"),
            ("stata", "Stata", "local color_hex \"{hex}\"\nglobal rgb \"{r} {g} {b}\""),
            ("systemverilog", "SystemVerilog", "localparam COLOR_HEX = 24'h{bare};"),
            (
                "unrealscript",
                "UnrealScript",
                "var string ColorHex = \"{hex}\";\nvar Color RGB = (R={r},G={g},B={b});",
            ),
            (
                "wolfram",
                "Wolfram Language",
                "colorHex = \"{hex}\";\nrgb = RGBColor[{r}/255, {g}/255, {b}/255];",
            ),
            ("zsh", "Zsh", "COLOR_HEX='{hex}'\ndeclare -A rgb=(r {r} g {g} b {b})"),
        ];

        let snippets = rows
            .iter()
            .map(|&(key, display, template)| Snippet { key, display, template })
            .collect();
        Self { snippets }
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snippet> {
        self.snippets.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.key.eq_ignore_ascii_case(key))
    }

    /// Rend l'extrait d'un langage, par clé ou par nom affiché
    /// Renders the snippet of a language, by key or by display name
    pub fn render(&self, language: &str, color: Rgb) -> Option<String> {
        self.get(language)
            .or_else(|| self.find_by_display(language))
            .map(|s| s.render(color))
    }

    pub fn find_by_display(&self, display: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.display.eq_ignore_ascii_case(display))
    }

    /// Noms affichés, triés alphabétiquement (sans tenir compte de la casse)
    /// Display names, sorted alphabetically (case-insensitive)
    pub fn display_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.snippets.iter().map(|s| s.display).collect();
        names.sort_by_key(|name| name.to_lowercase());
        names
    }
}

impl Default for SnippetTable {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    const SAMPLE: Rgb = Rgb::new(10, 20, 30);

    #[test]
    fn test_table_size_and_unique_keys() {
        let table = SnippetTable::builtin();
        assert_eq!(table.len(), 110);
        let keys: HashSet<_> = table.iter().map(|s| s.key).collect();
        assert_eq!(keys.len(), table.len());
    }

    #[test]
    fn test_css_snippet() {
        let table = SnippetTable::builtin();
        assert_eq!(
            table.render("css", SAMPLE).unwrap(),
            "color: #0A141E;\n/* or */\ncolor: rgb(10, 20, 30);"
        );
    }

    #[test]
    fn test_literal_braces_survive() {
        let table = SnippetTable::builtin();
        assert_eq!(
            table.render("json", SAMPLE).unwrap(),
            "{\n  \"hex\": \"#0A141E\",\n  \"rgb\": { \"r\": 10, \"g\": 20, \"b\": 30 }\n}"
        );
        assert_eq!(
            table.render("go", SAMPLE).unwrap(),
            "colorHex := \"#0A141E\"\ntype RGB struct{R,G,B uint8}\nrgb := RGB{10,20,30}"
        );
        assert_eq!(
            table.render("systemverilog", SAMPLE).unwrap(),
            "localparam COLOR_HEX = 24'h0A141E;"
        );
    }

    #[test]
    fn test_lookup_by_display_name() {
        let table = SnippetTable::builtin();
        assert_eq!(table.render("C#", SAMPLE), table.render("csharp", SAMPLE));
        assert_eq!(table.find_by_display("python").unwrap().key, "python");
        assert!(table.render("klingon", SAMPLE).is_none());
    }

    #[test]
    fn test_every_snippet_mentions_the_color() {
        let table = SnippetTable::builtin();
        for snippet in table.iter() {
            let text = snippet.render(SAMPLE);
            assert!(
                text.contains("0A141E") || text.contains("0a141e") || text.contains("10"),
                "{} does not embed the color: {}",
                snippet.key,
                text
            );
        }
    }

    #[test]
    fn test_display_names_sorted() {
        let names = SnippetTable::builtin().display_names();
        assert!(names
            .windows(2)
            .all(|w| w[0].to_lowercase() <= w[1].to_lowercase()));
    }
}
