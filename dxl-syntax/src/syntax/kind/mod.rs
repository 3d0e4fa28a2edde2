mod builtins;

use std::fmt;

use self::builtins::BUILTIN_TYPES;

/// Every kind of token and tree the parser knows about. Tokens come first,
/// followed by the trees built out of them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Kind {
    // Tokens
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `?`
    Question,
    /// `~`
    Tilde,
    /// `\`
    Backslash,
    /// `&`
    Ampersand,
    /// `&=`
    AmpersandEqual,
    /// `&&`
    AmpersandAmpersand,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `|`
    Pipe,
    /// `|=`
    PipeEqual,
    /// `||`
    PipePipe,
    /// `^`
    Caret,
    /// `^^`
    CaretCaret,
    /// `^=`
    CaretEqual,
    /// `:`
    Colon,
    /// `:=`
    ColonEqual,
    /// `::`
    ColonColon,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `=>`
    EqualArrow,
    /// `/`
    Slash,
    /// `/=`
    SlashEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `>>`
    GreaterGreater,
    /// `>>=`
    GreaterGreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `<>`
    LessGreater,
    /// `<<`
    LessLess,
    /// `<<=`
    LessLessEqual,
    /// `<-`
    LessMinus,
    /// `-`
    Minus,
    /// `-=`
    MinusEqual,
    /// `--`
    MinusMinus,
    /// `->`
    MinusArrow,
    /// `%`
    Percent,
    /// `%=`
    PercentEqual,
    /// `.`
    Dot,
    /// `..`
    DotDot,
    /// `+`
    Plus,
    /// `++`
    PlusPlus,
    /// `+=`
    PlusEqual,
    /// `*`
    Star,
    /// `*=`
    StarEqual,

    /// `and`
    KwAnd,
    /// `bool`
    KwBool,
    /// `break`
    KwBreak,
    /// `by`
    KwBy,
    /// `case`
    KwCase,
    /// `char`
    KwChar,
    /// `const`
    KwConst,
    /// `continue`
    KwContinue,
    /// `default`
    KwDefault,
    /// `do`
    KwDo,
    /// `else`
    KwElse,
    /// `enum`
    KwEnum,
    /// `false`
    KwFalse,
    /// `for`
    KwFor,
    /// `if`
    KwIf,
    /// `in`
    KwIn,
    /// `#include`
    KwInclude,
    /// `int`
    KwInt,
    /// `module`
    KwModule,
    /// `null`
    KwNull,
    /// `object`
    KwObject,
    /// `or`
    KwOr,
    /// `pragma`
    KwPragma,
    /// `real`
    KwReal,
    /// `return`
    KwReturn,
    /// `sizeof`
    KwSizeof,
    /// `static`
    KwStatic,
    /// `string`
    KwString,
    /// `struct`
    KwStruct,
    /// `switch`
    KwSwitch,
    /// `then`
    KwThen,
    /// `true`
    KwTrue,
    /// `union`
    KwUnion,
    /// `void`
    KwVoid,
    /// `while`
    KwWhile,

    /// A `//` line comment or a `/* */` block comment
    Comment,
    /// A single or double quoted string literal
    String,
    /// An integer literal
    Integer,
    /// A real literal, with a fraction or an exponent
    Real,
    /// An identifier
    Name,
    /// A run of spaces
    Spaces,
    /// A run of tabs
    Tabs,
    /// A line break that does not end a statement
    Eol,
    /// A line break that ends a statement
    End,
    /// The zero-width token at the end of the source
    Eof,
    /// A character the lexer does not recognize
    Invalid,

    // Trees
    /// A source file
    Root,
    /// `pragma name, value`
    StmtPragma,
    /// `#include <path>` or `#include "path"`
    StmtInclude,
    /// `type name[count] = {..}`
    StmtArrayDecl,
    /// `{ .. }`
    StmtBlock,
    /// `break`
    StmtBreak,
    /// `continue`
    StmtContinue,
    /// An expression used as a statement
    StmtExpr,
    /// `for (init; cond; step) body`
    StmtFor,
    /// `for item in parent by step do body`
    StmtForIn,
    /// `type name(params) { .. }`
    StmtFuncDecl,
    /// `if (cond) then else other`
    StmtIf,
    /// `return expr`
    StmtReturn,
    /// `type name = value`
    StmtVarDecl,
    /// `while (cond) body`
    StmtWhile,
    /// `a -> b` or `a <- b`
    ExprArrow,
    /// `a = b`, `a += b`, ..
    ExprAssignment,
    /// `a + b`, `a * b`, ..
    ExprBinary,
    /// `f(a, b)` or `f a`
    ExprCall,
    /// `(type expr)` or `expr type`
    ExprCast,
    /// `a < b`, `a >= b`, ..
    ExprCompare,
    /// `a == b` or `a != b`
    ExprEquality,
    /// `a.b`
    ExprGet,
    /// `(a)`
    ExprGrouping,
    /// `a[b]`
    ExprIndex,
    /// A literal value
    ExprLiteral,
    /// `a && b`, `a or b`, ..
    ExprLogical,
    /// `a++` or `a--`
    ExprPostfix,
    /// `-a`, `!a`, ..
    ExprPrefix,
    /// `a:b`
    ExprRange,
    /// Two juxtaposed expressions, the second of which is concatenated
    ExprStringConcat,
    /// `a ? b : c`
    ExprTernary,
    /// `a << b` or `a >> b`
    ExprWrite,
    /// `null`
    Null,
    /// The parameters of a function declaration
    ParamList,
    /// A single parameter
    Param,
    /// The arguments of a call or an array initializer
    ArgList,
    /// A single argument
    Arg,
    /// A type annotation
    TypeRef,
    /// A reference to a name
    NameRef,
    /// Several comma separated names declared together
    NameRefList,
    /// A qualifier which is accepted but ignored
    WarningNode,
    /// Tokens skipped while recovering from a syntax error
    ErrorNode,
}

impl Kind {
    /// Returns `true` if this represents something without semantic
    /// significance (other than as a token separator).
    pub fn is_trivia(&self) -> bool {
        matches!(self, Kind::Comment | Kind::Spaces | Kind::Tabs | Kind::Eol)
    }

    /// Returns `true` if this token terminates a statement.
    pub fn is_stmt_end(&self) -> bool {
        matches!(self, Kind::Semicolon | Kind::End)
    }

    pub fn is_token(&self) -> bool {
        *self <= Kind::Invalid
    }

    pub fn is_node(&self) -> bool {
        !self.is_token()
    }

    /// Returns `true` if a line break directly after this token cannot end a
    /// statement, since the token expects something to follow it.
    pub fn ignores_following_end(&self) -> bool {
        matches!(
            self,
            Kind::Semicolon
                | Kind::Comma
                | Kind::Question
                | Kind::Colon
                | Kind::Equal
                | Kind::LeftParen
                | Kind::Plus
                | Kind::Star
                | Kind::LeftBracket
                | Kind::Ampersand
                | Kind::Minus
                | Kind::Bang
                | Kind::Tilde
                | Kind::Slash
                | Kind::Percent
                | Kind::LessLess
                | Kind::GreaterGreater
                | Kind::LessGreater
                | Kind::Less
                | Kind::Greater
                | Kind::LessEqual
                | Kind::GreaterEqual
                | Kind::EqualEqual
                | Kind::BangEqual
                | Kind::Caret
                | Kind::Pipe
                | Kind::AmpersandAmpersand
                | Kind::KwAnd
                | Kind::PipePipe
                | Kind::KwOr
                | Kind::CaretCaret
                | Kind::PlusEqual
                | Kind::MinusEqual
                | Kind::StarEqual
                | Kind::SlashEqual
                | Kind::PercentEqual
                | Kind::LessLessEqual
                | Kind::GreaterGreaterEqual
                | Kind::AmpersandEqual
                | Kind::PipeEqual
                | Kind::CaretEqual
                | Kind::ColonEqual
                | Kind::EqualArrow
                | Kind::DotDot
                | Kind::Dot
                | Kind::ColonColon
                | Kind::Backslash
        )
    }

    /// Look up the keyword spelled by `text`, if any.
    pub fn keyword(text: &str) -> Option<Kind> {
        Some(match text {
            "#include" => Kind::KwInclude,
            "and" => Kind::KwAnd,
            "bool" => Kind::KwBool,
            "break" => Kind::KwBreak,
            "by" => Kind::KwBy,
            "case" => Kind::KwCase,
            "char" => Kind::KwChar,
            "const" => Kind::KwConst,
            "continue" => Kind::KwContinue,
            "default" => Kind::KwDefault,
            "do" => Kind::KwDo,
            "else" => Kind::KwElse,
            "enum" => Kind::KwEnum,
            "false" => Kind::KwFalse,
            "for" => Kind::KwFor,
            "if" => Kind::KwIf,
            "in" => Kind::KwIn,
            "int" => Kind::KwInt,
            "module" => Kind::KwModule,
            "null" => Kind::KwNull,
            "object" => Kind::KwObject,
            "or" => Kind::KwOr,
            "pragma" => Kind::KwPragma,
            "real" => Kind::KwReal,
            "return" => Kind::KwReturn,
            "sizeof" => Kind::KwSizeof,
            "static" => Kind::KwStatic,
            "string" => Kind::KwString,
            "struct" => Kind::KwStruct,
            "switch" => Kind::KwSwitch,
            "then" => Kind::KwThen,
            "true" => Kind::KwTrue,
            "union" => Kind::KwUnion,
            "void" => Kind::KwVoid,
            "while" => Kind::KwWhile,
            _ => return None,
        })
    }

    /// Returns `true` if a token of this kind with the given text names a
    /// type, either through a keyword or a predefined type name.
    pub fn is_type_specifier(&self, text: &str) -> bool {
        match self {
            Kind::KwInt | Kind::KwString | Kind::KwVoid | Kind::KwReal | Kind::KwBool => true,
            Kind::Name => is_builtin_type(text),
            _ => false,
        }
    }

    /// The name of this kind as it appears in tree dumps.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::LeftParen => "LPAREN",
            Kind::RightParen => "RPAREN",
            Kind::LeftBrace => "LCURLY",
            Kind::RightBrace => "RCURLY",
            Kind::LeftBracket => "LBRACKET",
            Kind::RightBracket => "RBRACKET",
            Kind::Semicolon => "SEMICOLON",
            Kind::Comma => "COMMA",
            Kind::Question => "QMARK",
            Kind::Tilde => "TILDE",
            Kind::Backslash => "BSLASH",
            Kind::Ampersand => "AMPR",
            Kind::AmpersandEqual => "AMPREQUAL",
            Kind::AmpersandAmpersand => "AMPRAMPR",
            Kind::Bang => "BANG",
            Kind::BangEqual => "BANGEQUAL",
            Kind::Pipe => "BAR",
            Kind::PipeEqual => "BAREQUAL",
            Kind::PipePipe => "BARBAR",
            Kind::Caret => "CARET",
            Kind::CaretCaret => "CARETCARET",
            Kind::CaretEqual => "CARETEQUAL",
            Kind::Colon => "COLON",
            Kind::ColonEqual => "COLONEQUAL",
            Kind::ColonColon => "COLONCOLON",
            Kind::Equal => "EQUAL",
            Kind::EqualEqual => "EQUALEQUAL",
            Kind::EqualArrow => "EQUALGREAT",
            Kind::Slash => "FSLASH",
            Kind::SlashEqual => "FSLASHEQUAL",
            Kind::Greater => "GREAT",
            Kind::GreaterEqual => "GREATEQUAL",
            Kind::GreaterGreater => "GREATGREAT",
            Kind::GreaterGreaterEqual => "GREATGREATEQUAL",
            Kind::Less => "LESS",
            Kind::LessEqual => "LESSEQUAL",
            Kind::LessGreater => "LESSGREAT",
            Kind::LessLess => "LESSLESS",
            Kind::LessLessEqual => "LESSLESSEQUAL",
            Kind::LessMinus => "LESSMINUS",
            Kind::Minus => "MINUS",
            Kind::MinusEqual => "MINUSEQUAL",
            Kind::MinusMinus => "MINUSMINUS",
            Kind::MinusArrow => "MINUSGREAT",
            Kind::Percent => "PERCENT",
            Kind::PercentEqual => "PERCENTEQUAL",
            Kind::Dot => "PERIOD",
            Kind::DotDot => "PERIODPERIOD",
            Kind::Plus => "PLUS",
            Kind::PlusPlus => "PLUSPLUS",
            Kind::PlusEqual => "PLUSEQUAL",
            Kind::Star => "STAR",
            Kind::StarEqual => "STAREQUAL",

            Kind::KwAnd => "KWAND",
            Kind::KwBool => "KWBOOL",
            Kind::KwBreak => "KWBREAK",
            Kind::KwBy => "KWBY",
            Kind::KwCase => "KWCASE",
            Kind::KwChar => "KWCHAR",
            Kind::KwConst => "KWCONST",
            Kind::KwContinue => "KWCONTINUE",
            Kind::KwDefault => "KWDEFAULT",
            Kind::KwDo => "KWDO",
            Kind::KwElse => "KWELSE",
            Kind::KwEnum => "KWENUM",
            Kind::KwFalse => "KWFALSE",
            Kind::KwFor => "KWFOR",
            Kind::KwIf => "KWIF",
            Kind::KwIn => "KWIN",
            Kind::KwInclude => "KWINCLUDE",
            Kind::KwInt => "KWINT",
            Kind::KwModule => "KWMODULE",
            Kind::KwNull => "KWNULL",
            Kind::KwObject => "KWOBJECT",
            Kind::KwOr => "KWOR",
            Kind::KwPragma => "KWPRAGMA",
            Kind::KwReal => "KWREAL",
            Kind::KwReturn => "KWRETURN",
            Kind::KwSizeof => "KWSIZEOF",
            Kind::KwStatic => "KWSTATIC",
            Kind::KwString => "KWSTRING",
            Kind::KwStruct => "KWSTRUCT",
            Kind::KwSwitch => "KWSWITCH",
            Kind::KwThen => "KWTHEN",
            Kind::KwTrue => "KWTRUE",
            Kind::KwUnion => "KWUNION",
            Kind::KwVoid => "KWVOID",
            Kind::KwWhile => "KWWHILE",

            Kind::Comment => "COMMENT",
            Kind::String => "STRING",
            Kind::Integer => "INTEGER",
            Kind::Real => "REAL",
            Kind::Name => "IDENT",
            Kind::Spaces => "SPACES",
            Kind::Tabs => "TABS",
            Kind::Eol => "EOL",
            Kind::End => "END",
            Kind::Eof => "EOF",
            Kind::Invalid => "LEXERROR",

            Kind::Root => "TREEROOT",
            Kind::StmtPragma => "STMTPRAGMA",
            Kind::StmtInclude => "STMTINCLUDE",
            Kind::StmtArrayDecl => "STMTARRAYDECL",
            Kind::StmtBlock => "STMTBLOCK",
            Kind::StmtBreak => "STMTBREAK",
            Kind::StmtContinue => "STMTCONTINUE",
            Kind::StmtExpr => "STMTEXPR",
            Kind::StmtFor => "STMTFOR",
            Kind::StmtForIn => "STMTFORIN",
            Kind::StmtFuncDecl => "STMTFUNCDECL",
            Kind::StmtIf => "STMTIF",
            Kind::StmtReturn => "STMTRETURN",
            Kind::StmtVarDecl => "STMTVARDECL",
            Kind::StmtWhile => "STMTWHILE",
            Kind::ExprArrow => "EXPRARROW",
            Kind::ExprAssignment => "EXPRASSIGNMENT",
            Kind::ExprBinary => "EXPRBINARY",
            Kind::ExprCall => "EXPRCALL",
            Kind::ExprCast => "EXPRCAST",
            Kind::ExprCompare => "EXPRCOMPARE",
            Kind::ExprEquality => "EXPREQUALITY",
            Kind::ExprGet => "EXPRGET",
            Kind::ExprGrouping => "EXPRGROUPING",
            Kind::ExprIndex => "EXPRINDEX",
            Kind::ExprLiteral => "EXPRLITERAL",
            Kind::ExprLogical => "EXPRLOGICAL",
            Kind::ExprPostfix => "EXPRPOSTFIX",
            Kind::ExprPrefix => "EXPRPREFIX",
            Kind::ExprRange => "EXPRRANGE",
            Kind::ExprStringConcat => "EXPRSTRINGCONCAT",
            Kind::ExprTernary => "EXPRTERNARY",
            Kind::ExprWrite => "EXPRWRITE",
            Kind::Null => "NULL",
            Kind::ParamList => "PARAMLIST",
            Kind::Param => "PARAM",
            Kind::ArgList => "ARGLIST",
            Kind::Arg => "ARG",
            Kind::TypeRef => "TYPEREF",
            Kind::NameRef => "NAMEREF",
            Kind::NameRefList => "NAMEREFLIST",
            Kind::WarningNode => "WARNINGNODE",
            Kind::ErrorNode => "ERRORNODE",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` if `name` is one of the predefined DOORS types.
pub fn is_builtin_type(name: &str) -> bool {
    BUILTIN_TYPES.binary_search(&name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{is_builtin_type, Kind};

    #[test]
    fn tokens_precede_trees() {
        assert!(Kind::Invalid.is_token());
        assert!(Kind::LeftParen.is_token());
        assert!(Kind::Root.is_node());
        assert!(Kind::ErrorNode.is_node());
    }

    #[test]
    fn builtin_types_are_sorted() {
        assert!(super::BUILTIN_TYPES.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn type_specifiers() {
        assert!(Kind::KwInt.is_type_specifier("int"));
        assert!(Kind::Name.is_type_specifier("Module"));
        assert!(Kind::Name.is_type_specifier("Skip"));
        assert!(!Kind::Name.is_type_specifier("module_name"));
        assert!(!Kind::KwChar.is_type_specifier("char"));
        assert!(is_builtin_type("Buffer"));
    }

    #[test]
    fn keywords() {
        assert_eq!(Some(Kind::KwInclude), Kind::keyword("#include"));
        assert_eq!(Some(Kind::KwThen), Kind::keyword("then"));
        assert_eq!(None, Kind::keyword("Then"));
        assert_eq!(None, Kind::keyword("#define"));
    }
}
