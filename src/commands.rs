use crate::REGISTRY;
use cmdspec_core::commands::{
    ArgumentNode, BOOLEANS, BuildError, CommandRegistry, CommandResult, CommandTree,
    ExecutionContext, NUMBERS, PLAYERS, ParseFailure, TIMES, WORLDS, X, Y, Z,
};
use cmdspec_core::config::EngineConfig;
use cmdspec_core::player::{HyphenatedUUID, Player};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Diamond,
    Stone,
    Redstone,
    Repeater,
}

impl Item {
    const NAMES: [&'static str; 4] = ["diamond", "stone", "redstone", "repeater"];

    fn parse(name: &str) -> Option<Item> {
        Some(match name.to_lowercase().as_str() {
            "diamond" => Item::Diamond,
            "stone" => Item::Stone,
            "redstone" => Item::Redstone,
            "repeater" => Item::Repeater,
            _ => return None,
        })
    }
}

fn item_node() -> ArgumentNode {
    ArgumentNode::custom(
        "item",
        |_| Item::NAMES.iter().map(|name| name.to_string()).collect(),
        |_, token| {
            Item::parse(token).ok_or_else(|| ParseFailure::message(format!("Unknown item {}", token)))
        },
    )
}

fn player_names(players: &[Player]) -> String {
    if players.is_empty() {
        return "nobody".to_string();
    }
    players
        .iter()
        .map(|player| player.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn register_commands(
    registry: &mut CommandRegistry,
    config: &EngineConfig,
) -> Result<(), BuildError> {
    registry.register(
        CommandTree::builder("teleport")
            .description("Teleport players to a world")
            .permission("cmdspec.teleport")
            .permission_message(config.permission_message.as_str())
            .argument(&PLAYERS)
            .optional_argument(&WORLDS)
            .executes(|ctx| {
                let players = ctx.args().players(0)?;
                let world = match ctx.args().optional_world(1)? {
                    Some(world) => world.name,
                    None => "their current world".to_string(),
                };
                for player in &players {
                    info!(
                        "Teleporting {} ({}) to {}",
                        player.name,
                        HyphenatedUUID(player.uuid),
                        world
                    );
                }
                ctx.reply(&format!("Teleported {} to {}", player_names(&players), world))
            })
            .build()?,
    );
    registry.add_alias("tp", "teleport");

    registry.register(
        CommandTree::builder("fly")
            .description("Toggle flight")
            .permission("cmdspec.fly")
            .permission_message(config.permission_message.as_str())
            .argument(&PLAYERS)
            .optional_argument(&BOOLEANS)
            .executes(|ctx| {
                let players = ctx.args().players(0)?;
                let enabled = ctx.args().optional_boolean(1)?.unwrap_or(true);
                let state = if enabled { "enabled" } else { "disabled" };
                ctx.reply(&format!("Flight {} for {}", state, player_names(&players)))
            })
            .build()?,
    );

    registry.register(
        CommandTree::builder("mute")
            .description("Mute players for a while")
            .permission("cmdspec.mute")
            .permission_message(config.permission_message.as_str())
            .argument(&PLAYERS)
            .argument(&TIMES)
            .executes(|ctx| {
                let players = ctx.args().players(0)?;
                let duration = ctx.args().duration(1)?;
                ctx.reply(&format!("Muted {} for {:?}", player_names(&players), duration))
            })
            .build()?,
    );

    registry.register(
        CommandTree::builder("setpos")
            .description("Move yourself to a position")
            .argument(&X)
            .argument(&Y)
            .argument(&Z)
            .executes_as_player(|ctx, player| {
                let (x, y, z) = (
                    ctx.args().coordinate(0)?,
                    ctx.args().coordinate(1)?,
                    ctx.args().coordinate(2)?,
                );
                ctx.reply(&format!(
                    "Moved {} from ({}, {}, {}) to ({}, {}, {})",
                    player.name, player.location.x, player.location.y, player.location.z, x, y, z
                ))
            })
            .build()?,
    );

    registry.register(
        CommandTree::builder("give")
            .description("Give items to players")
            .permission("cmdspec.give")
            .permission_message(config.permission_message.as_str())
            .argument(&PLAYERS)
            .argument(&item_node())
            .optional_argument(&ArgumentNode::integer("amount", 1, 64))
            .executes(|ctx| {
                let players = ctx.args().players(0)?;
                let item = *ctx.args().custom::<Item>(1)?;
                let amount = ctx.args().optional_integer(2)?.unwrap_or(1);
                ctx.reply(&format!(
                    "Gave {} {:?} to {}",
                    amount,
                    item,
                    player_names(&players)
                ))
            })
            .build()?,
    );

    registry.register(main_command(config)?);

    registry.register(
        CommandTree::builder("help")
            .description("List available commands")
            .executes(exec_help_command)
            .build()?,
    );

    Ok(())
}

/// The command named after the configured `command_name`, bundling admin
/// sub-commands.
fn main_command(config: &EngineConfig) -> Result<CommandTree, BuildError> {
    CommandTree::builder(config.command_name.as_str())
        .description("Command engine administration")
        .permission("cmdspec.admin")
        .permission_message(config.permission_message.as_str())
        .sub_command(
            CommandTree::builder("info")
                .optional_argument(&PLAYERS)
                .executes(|ctx| {
                    let players = match ctx.args().optional_players(0)? {
                        Some(players) => players,
                        None => vec![ctx.player()?],
                    };
                    for player in players {
                        let location = &player.location;
                        ctx.reply(&format!(
                            "{} ({}) is in {} at ({}, {}, {})",
                            player.name,
                            HyphenatedUUID(player.uuid),
                            location.world,
                            location.x,
                            location.y,
                            location.z
                        ))?;
                    }
                    Ok(())
                }),
        )
        .sub_command(
            CommandTree::builder("calc")
                .argument(&NUMBERS)
                .argument(&NUMBERS)
                .executes(|ctx| {
                    let sum = ctx.args().number(0)? + ctx.args().number(1)?;
                    ctx.reply(&format!("= {}", sum))
                }),
        )
        .sub_command(
            CommandTree::builder("worlds").executes(|ctx| {
                let names = ctx
                    .server()
                    .worlds()
                    .into_iter()
                    .map(|world| world.name)
                    .collect::<Vec<_>>();
                ctx.reply(&format!("Worlds: {}", names.join(", ")))
            }),
        )
        .build()
}

fn exec_help_command(ctx: &mut ExecutionContext<'_>) -> CommandResult<()> {
    let Some(registry) = REGISTRY.get() else {
        return ctx.reply("No commands registered.");
    };
    ctx.reply("Available commands:")?;
    for line in registry.help_lines() {
        ctx.reply(&format!(" {}", line))?;
    }
    Ok(())
}
